//! Application state and view model computation.
//!
//! [`AppState`] ties the playlist, the playback controller, and the theme
//! together. It is the single source of truth the renderer reads from; the view
//! model it produces is a pure function of it.
//!
//! # Example
//!
//! ```rust
//! use mediadeck::Config;
//!
//! let state = mediadeck::initialize(&Config::default());
//! let vm = state.compute_viewmodel();
//! assert!(!vm.playlist_visible);
//! assert_eq!(vm.header.title, "Playlist (0)");
//! ```

use crate::domain::{icon_for, MediaEntry};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, PlayerViewModel, PlaylistRow, StatusInfo, SurfaceInfo,
};

use super::controller::PlaybackController;
use super::playlist::PlaylistStore;

const KEYBINDINGS: &str = "space: play/pause | ←/→: prev/next | f: fullscreen | m: mute | ↑/↓: volume";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Ordered entries and the current-entry cursor.
    pub playlist: PlaylistStore,

    /// Surface selection, handle ownership, and transport.
    pub player: PlaybackController,

    /// Colour scheme for the text renderer.
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(player: PlaybackController, theme: Theme) -> Self {
        Self {
            playlist: PlaylistStore::new(),
            player,
            theme,
        }
    }

    /// Computes the renderable view of the current state.
    ///
    /// Pure: never mutates the playlist or the controller.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PlayerViewModel {
        let has_entries = !self.playlist.is_empty();

        let rows = self
            .playlist
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| self.compute_row(index, entry))
            .collect();

        PlayerViewModel {
            header: HeaderInfo {
                title: format!("Playlist ({})", self.playlist.len()),
            },
            rows,
            player_visible: has_entries,
            playlist_visible: has_entries,
            now_showing: self.compute_surface(),
            status: self.compute_status(),
            footer: FooterInfo {
                keybindings: KEYBINDINGS.to_string(),
            },
            empty_state: (!has_entries).then(|| EmptyState {
                message: "No media loaded".to_string(),
                subtitle: "Choose files or drop video, audio, and images here".to_string(),
            }),
        }
    }

    fn compute_row(&self, index: usize, entry: &MediaEntry) -> PlaylistRow {
        PlaylistRow {
            index,
            icon: icon_for(entry.kind()),
            name: entry.name().to_string(),
            is_current: index == self.playlist.cursor(),
        }
    }

    fn compute_surface(&self) -> Option<SurfaceInfo> {
        let surface = self.player.visible_surface()?;
        let entry = self.playlist.current()?;
        Some(SurfaceInfo {
            surface,
            title: entry.name().to_string(),
        })
    }

    fn compute_status(&self) -> Option<StatusInfo> {
        let entry = self.playlist.current()?;
        let level = self
            .player
            .visible_surface()
            .and_then(|surface| self.player.output(surface));

        Some(StatusInfo {
            text: format!(
                "{} ({}/{})",
                entry.name(),
                self.playlist.cursor() + 1,
                self.playlist.len()
            ),
            playing: self.player.state().is_playing(),
            has_transport: entry.kind().is_timed() && level.is_some(),
            volume: level.map(|level| level.volume),
            muted: level.is_some_and(|level| level.muted),
            fullscreen: self.player.is_fullscreen(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::DEFAULT_VOLUME_STEP;
    use crate::domain::{CandidateFile, Surface};
    use crate::resources::HandleRegistry;

    fn state_with(names: &[&str]) -> AppState {
        let player = PlaybackController::new(Box::new(HandleRegistry::new()), DEFAULT_VOLUME_STEP);
        let mut state = AppState::new(player, Theme::default());
        state.playlist.append(
            names
                .iter()
                .map(|name| CandidateFile::new(*name, vec![0_u8])),
        );
        state
    }

    #[test]
    fn empty_state_hides_sections() {
        let vm = state_with(&[]).compute_viewmodel();

        assert!(!vm.player_visible);
        assert!(!vm.playlist_visible);
        assert!(vm.rows.is_empty());
        assert!(vm.status.is_none());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn status_reads_name_position_and_total() {
        let mut state = state_with(&["video1.mp4", "audio1.mp3"]);
        state.player.play_at(&mut state.playlist, 1);

        let vm = state.compute_viewmodel();

        assert_eq!(vm.header.title, "Playlist (2)");
        assert_eq!(vm.status.map(|status| status.text).as_deref(), Some("audio1.mp3 (2/2)"));
        assert_eq!(
            vm.now_showing,
            Some(SurfaceInfo {
                surface: Surface::Audio,
                title: "audio1.mp3".to_string(),
            })
        );
    }

    #[test]
    fn rows_carry_icons_and_highlight_current() {
        let mut state = state_with(&["a.mp4", "b.mp3", "c.png"]);
        state.player.play_at(&mut state.playlist, 2);

        let vm = state.compute_viewmodel();
        let icons: Vec<&str> = vm.rows.iter().map(|row| row.icon).collect();
        let current: Vec<usize> = vm
            .rows
            .iter()
            .filter(|row| row.is_current)
            .map(|row| row.index)
            .collect();

        assert_eq!(icons, ["🎬", "🎵", "🖼️"]);
        assert_eq!(current, [2]);
        assert!(vm.status.is_some_and(|status| !status.has_transport));
    }

    #[test]
    fn computing_the_view_does_not_touch_state() {
        let mut state = state_with(&["a.mp4", "b.mp3"]);
        state.player.play_at(&mut state.playlist, 1);
        let before = (state.playlist.cursor(), state.player.state());

        let _ = state.compute_viewmodel();
        let _ = state.compute_viewmodel();

        assert_eq!((state.playlist.cursor(), state.player.state()), before);
        assert_eq!(state.player.broker().live_count(), 1);
    }
}
