//! Playback controller: surfaces, handles, and transport.
//!
//! [`PlaybackController`] decides which surface shows the current entry, owns the
//! single active [`PlaybackHandle`], and implements the transport operations. It is
//! the only component that talks to the [`ResourceBroker`]; the handle it holds is
//! always released before a new one is acquired, so at most one handle is ever
//! outstanding.
//!
//! Platform operations that complete asynchronously (starting playback, entering
//! fullscreen) are emitted as [`Action`]s and never awaited. Their outcomes come
//! back through the `on_*` methods, which ignore reports about handles that are no
//! longer active.

use std::fmt;

use crate::domain::{MediaKind, Surface};
use crate::resources::{HandleId, PlaybackHandle, ResourceBroker};

use super::actions::{Action, FullscreenTarget};
use super::modes::{OutputLevel, PlaybackState};
use super::playlist::PlaylistStore;

/// Default volume change per step.
pub const DEFAULT_VOLUME_STEP: f64 = 0.1;

/// The handle currently bound to a surface, with the kind it was acquired for.
#[derive(Debug, Clone)]
struct ActiveHandle {
    handle: PlaybackHandle,
    kind: MediaKind,
}

/// Selects surfaces, starts and stops playback, and exposes transport operations.
pub struct PlaybackController {
    broker: Box<dyn ResourceBroker>,
    active: Option<ActiveHandle>,
    state: PlaybackState,
    video_output: OutputLevel,
    audio_output: OutputLevel,
    volume_step: f64,
    fullscreen: bool,
}

impl PlaybackController {
    #[must_use]
    pub fn new(broker: Box<dyn ResourceBroker>, volume_step: f64) -> Self {
        Self {
            broker,
            active: None,
            state: PlaybackState::Idle,
            video_output: OutputLevel::default(),
            audio_output: OutputLevel::default(),
            volume_step,
            fullscreen: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// The handle bound to the visible surface, if any.
    #[must_use]
    pub fn active_handle(&self) -> Option<&PlaybackHandle> {
        self.active.as_ref().map(|active| &active.handle)
    }

    /// The surface currently shown, `None` when idle or for unknown-kind entries.
    #[must_use]
    pub fn visible_surface(&self) -> Option<Surface> {
        self.active.as_ref().and_then(|active| active.kind.surface())
    }

    #[must_use]
    pub const fn output(&self, surface: Surface) -> Option<OutputLevel> {
        match surface {
            Surface::Video => Some(self.video_output),
            Surface::Audio => Some(self.audio_output),
            Surface::Image => None,
        }
    }

    #[must_use]
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn broker(&self) -> &dyn ResourceBroker {
        self.broker.as_ref()
    }

    /// Makes `index` the current entry and presents it.
    ///
    /// Out-of-range indices are a no-op. Otherwise the previous handle is released,
    /// a new one is acquired, all surfaces are hidden, the matching surface is
    /// shown, and timed media gets a playback attempt.
    pub fn play_at(&mut self, playlist: &mut PlaylistStore, index: usize) -> Vec<Action> {
        if !playlist.set_cursor(index) {
            return vec![];
        }
        let Some(entry) = playlist.current() else {
            return vec![];
        };

        let _span = tracing::debug_span!("play_at", index, kind = %entry.kind()).entered();

        self.release_active();

        let kind = entry.kind();
        let mut actions = vec![Action::HideSurfaces];

        let handle = match self.broker.acquire(entry) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(name = %entry.name(), error = %e, "could not acquire playback handle");
                self.state = PlaybackState::Paused(kind);
                return actions;
            }
        };

        if let Some(surface) = kind.surface() {
            actions.push(Action::Present {
                surface,
                source: handle.clone(),
                title: entry.name().to_string(),
            });
            if kind.is_timed() {
                actions.push(Action::Play {
                    surface,
                    handle: handle.id,
                });
            }
        } else {
            tracing::debug!(name = %entry.name(), "entry has no surface");
        }

        tracing::debug!(handle = %handle.id, name = %entry.name(), "entry presented");

        self.active = Some(ActiveHandle { handle, kind });
        self.state = PlaybackState::Playing(kind);
        actions
    }

    /// Advances to the next entry, wrapping to the first after the last.
    pub fn next(&mut self, playlist: &mut PlaylistStore) -> Vec<Action> {
        playlist
            .next_index()
            .map_or_else(Vec::new, |index| self.play_at(playlist, index))
    }

    /// Steps back to the previous entry, wrapping to the last before the first.
    pub fn previous(&mut self, playlist: &mut PlaylistStore) -> Vec<Action> {
        playlist
            .previous_index()
            .map_or_else(Vec::new, |index| self.play_at(playlist, index))
    }

    /// Flips playing and paused on the active timed surface.
    pub fn toggle_play_pause(&mut self) -> Vec<Action> {
        let Some((surface, handle)) = self.timed_target() else {
            return vec![];
        };

        match self.state {
            PlaybackState::Playing(kind) => {
                self.state = PlaybackState::Paused(kind);
                vec![Action::Pause { surface, handle }]
            }
            PlaybackState::Paused(kind) => {
                self.state = PlaybackState::Playing(kind);
                vec![Action::Play { surface, handle }]
            }
            PlaybackState::Idle => vec![],
        }
    }

    /// Enters fullscreen on the surface for the current kind, or leaves it.
    ///
    /// Video and image entries target their own surface; anything else targets
    /// the whole view.
    pub fn toggle_fullscreen(&self) -> Vec<Action> {
        if self.fullscreen {
            return vec![Action::ExitFullscreen];
        }

        let target = match self.state.kind() {
            Some(MediaKind::Video) => FullscreenTarget::Surface(Surface::Video),
            Some(MediaKind::Image) => FullscreenTarget::Surface(Surface::Image),
            Some(MediaKind::Audio | MediaKind::Unknown) | None => FullscreenTarget::Document,
        };
        vec![Action::RequestFullscreen(target)]
    }

    /// Flips the muted flag of the active timed surface.
    pub fn toggle_mute(&mut self) -> Vec<Action> {
        let Some((surface, _)) = self.timed_target() else {
            return vec![];
        };
        let Some(output) = self.output_mut(surface) else {
            return vec![];
        };

        output.muted = !output.muted;
        vec![Action::SetMuted {
            surface,
            muted: output.muted,
        }]
    }

    pub fn volume_up(&mut self) -> Vec<Action> {
        self.nudge_volume(self.volume_step)
    }

    pub fn volume_down(&mut self) -> Vec<Action> {
        self.nudge_volume(-self.volume_step)
    }

    /// Releases the active handle, hides every surface, and goes idle.
    pub fn stop(&mut self) -> Vec<Action> {
        self.release_active();
        self.state = PlaybackState::Idle;
        vec![Action::HideSurfaces]
    }

    /// The host started playback for `handle`. Returns whether state changed.
    pub fn on_playback_started(&mut self, handle: HandleId) -> bool {
        self.settle(handle, PlaybackState::Playing)
    }

    /// The host paused playback for `handle` on its own (native controls, focus
    /// loss). Returns whether state changed.
    pub fn on_playback_paused(&mut self, handle: HandleId) -> bool {
        self.settle(handle, PlaybackState::Paused)
    }

    /// The platform refused to start playback, typically autoplay without a user
    /// gesture. Not an error: the entry stays current and settles into paused.
    pub fn on_playback_rejected(&mut self, handle: HandleId, reason: &str) -> bool {
        if !self.is_current_timed(handle) {
            tracing::debug!(handle = %handle, reason = %reason, "rejection for inactive handle ignored");
            return false;
        }
        tracing::warn!(handle = %handle, reason = %reason, "playback start rejected");
        self.settle(handle, PlaybackState::Paused)
    }

    /// Timed media reached its natural end: chain to the next entry.
    pub fn on_media_ended(&mut self, playlist: &mut PlaylistStore, handle: HandleId) -> Vec<Action> {
        if !self.is_current_timed(handle) {
            tracing::debug!(handle = %handle, "stale end-of-media ignored");
            return vec![];
        }
        self.next(playlist)
    }

    pub fn on_fullscreen_changed(&mut self, fullscreen: bool) -> bool {
        let changed = self.fullscreen != fullscreen;
        self.fullscreen = fullscreen;
        changed
    }

    pub fn on_fullscreen_denied(&self, reason: &str) {
        tracing::warn!(reason = %reason, "fullscreen request denied");
    }

    fn is_current_timed(&self, handle: HandleId) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.handle.id == handle && active.kind.is_timed())
    }

    fn settle(&mut self, handle: HandleId, to: fn(MediaKind) -> PlaybackState) -> bool {
        let Some(active) = self.active.as_ref().filter(|_| self.is_current_timed(handle)) else {
            tracing::debug!(handle = %handle, "report for inactive handle ignored");
            return false;
        };

        let next = to(active.kind);
        let changed = self.state != next;
        self.state = next;
        changed
    }

    fn nudge_volume(&mut self, delta: f64) -> Vec<Action> {
        let Some((surface, _)) = self.timed_target() else {
            return vec![];
        };
        let Some(output) = self.output_mut(surface) else {
            return vec![];
        };

        // Snap to hundredths so repeated steps land on exact tenths.
        let volume = ((output.volume + delta).clamp(0.0, 1.0) * 100.0).round() / 100.0;
        output.volume = volume;
        vec![Action::SetVolume { surface, volume }]
    }

    fn timed_target(&self) -> Option<(Surface, HandleId)> {
        let active = self.active.as_ref()?;
        if !active.kind.is_timed() {
            return None;
        }
        active.kind.surface().map(|surface| (surface, active.handle.id))
    }

    fn output_mut(&mut self, surface: Surface) -> Option<&mut OutputLevel> {
        match surface {
            Surface::Video => Some(&mut self.video_output),
            Surface::Audio => Some(&mut self.audio_output),
            Surface::Image => None,
        }
    }

    fn release_active(&mut self) {
        if let Some(active) = self.active.take() {
            self.broker.release(&active.handle);
        }
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("active", &self.active)
            .field("state", &self.state)
            .field("video_output", &self.video_output)
            .field("audio_output", &self.audio_output)
            .field("fullscreen", &self.fullscreen)
            .field("live_handles", &self.broker.live_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CandidateFile, MediaEntry, MediadeckError, Result};
    use crate::resources::HandleRegistry;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    fn playlist(names: &[&str]) -> PlaylistStore {
        let mut store = PlaylistStore::new();
        store.append(
            names
                .iter()
                .map(|name| CandidateFile::new(*name, vec![1_u8, 2, 3])),
        );
        store
    }

    fn controller() -> PlaybackController {
        PlaybackController::new(Box::new(HandleRegistry::new()), DEFAULT_VOLUME_STEP)
    }

    fn played_handle(actions: &[Action]) -> Option<HandleId> {
        actions.iter().find_map(|action| match action {
            Action::Play { handle, .. } => Some(*handle),
            _ => None,
        })
    }

    /// Broker whose acquisitions always fail.
    struct ExhaustedBroker;

    impl ResourceBroker for ExhaustedBroker {
        fn acquire(&mut self, entry: &MediaEntry) -> Result<PlaybackHandle> {
            Err(MediadeckError::Resource(format!("no handle for {}", entry.name())))
        }

        fn release(&mut self, _handle: &PlaybackHandle) -> bool {
            false
        }

        fn is_live(&self, _id: HandleId) -> bool {
            false
        }

        fn live_count(&self) -> usize {
            0
        }
    }

    #[test]
    fn play_at_hides_then_presents_and_plays_video() {
        let mut list = playlist(&["clip.mp4"]);
        let mut player = controller();

        let actions = player.play_at(&mut list, 0);

        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0], Action::HideSurfaces);
        assert!(matches!(
            &actions[1],
            Action::Present { surface: Surface::Video, title, .. } if title == "clip.mp4"
        ));
        assert!(matches!(actions[2], Action::Play { surface: Surface::Video, .. }));
        assert_eq!(player.state(), PlaybackState::Playing(MediaKind::Video));
        assert_eq!(player.visible_surface(), Some(Surface::Video));
    }

    #[test]
    fn image_is_presented_without_playback() {
        let mut list = playlist(&["photo.jpg"]);
        let mut player = controller();

        let actions = player.play_at(&mut list, 0);

        assert_eq!(actions.len(), 2);
        assert!(matches!(
            actions[1],
            Action::Present { surface: Surface::Image, .. }
        ));
        assert!(played_handle(&actions).is_none());
    }

    #[test]
    fn out_of_range_play_is_noop() {
        let mut list = playlist(&["a.mp3"]);
        let mut player = controller();

        assert!(player.play_at(&mut list, 4).is_empty());
        assert_eq!(player.state(), PlaybackState::Idle);
        assert_eq!(player.broker().live_count(), 0);
    }

    #[test]
    fn at_most_one_handle_is_live() {
        let mut list = playlist(&["a.mp4", "b.mp3", "c.png"]);
        let mut player = controller();

        let first = player.play_at(&mut list, 0);
        let first_id = played_handle(&first);
        player.next(&mut list);
        player.next(&mut list);
        player.previous(&mut list);

        assert_eq!(player.broker().live_count(), 1);
        assert!(first_id.is_some_and(|id| !player.broker().is_live(id)));
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut list = playlist(&["a.mp4", "b.mp3", "c.png"]);
        let mut player = controller();

        player.play_at(&mut list, 2);
        player.next(&mut list);
        assert_eq!(list.cursor(), 0);

        player.previous(&mut list);
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn navigation_on_empty_playlist_is_noop() {
        let mut list = PlaylistStore::new();
        let mut player = controller();

        assert!(player.next(&mut list).is_empty());
        assert!(player.previous(&mut list).is_empty());
    }

    #[test]
    fn toggle_flips_timed_media() {
        let mut list = playlist(&["song.mp3"]);
        let mut player = controller();
        player.play_at(&mut list, 0);

        let paused = player.toggle_play_pause();
        assert!(matches!(paused[..], [Action::Pause { surface: Surface::Audio, .. }]));
        assert_eq!(player.state(), PlaybackState::Paused(MediaKind::Audio));

        let resumed = player.toggle_play_pause();
        assert!(matches!(resumed[..], [Action::Play { surface: Surface::Audio, .. }]));
        assert!(player.state().is_playing());
    }

    #[test]
    fn toggle_is_noop_for_images_and_idle() {
        let mut player = controller();
        assert!(player.toggle_play_pause().is_empty());

        let mut list = playlist(&["photo.png"]);
        player.play_at(&mut list, 0);
        assert!(player.toggle_play_pause().is_empty());
        assert!(player.toggle_mute().is_empty());
        assert!(player.volume_up().is_empty());
    }

    #[test]
    fn fullscreen_targets_follow_kind() {
        let mut list = playlist(&["clip.mp4", "song.mp3", "photo.gif"]);
        let mut player = controller();

        assert_eq!(
            player.toggle_fullscreen(),
            [Action::RequestFullscreen(FullscreenTarget::Document)]
        );

        player.play_at(&mut list, 0);
        assert_eq!(
            player.toggle_fullscreen(),
            [Action::RequestFullscreen(FullscreenTarget::Surface(Surface::Video))]
        );

        player.play_at(&mut list, 1);
        assert_eq!(
            player.toggle_fullscreen(),
            [Action::RequestFullscreen(FullscreenTarget::Document)]
        );

        player.play_at(&mut list, 2);
        assert_eq!(
            player.toggle_fullscreen(),
            [Action::RequestFullscreen(FullscreenTarget::Surface(Surface::Image))]
        );

        assert!(player.on_fullscreen_changed(true));
        assert_eq!(player.toggle_fullscreen(), [Action::ExitFullscreen]);
    }

    #[test]
    fn volume_clamps_and_is_per_surface() {
        let mut list = playlist(&["clip.mp4", "song.mp3"]);
        let mut player = controller();
        player.play_at(&mut list, 0);

        assert_eq!(
            player.volume_up(),
            [Action::SetVolume { surface: Surface::Video, volume: 1.0 }]
        );
        for _ in 0..3 {
            player.volume_down();
        }
        assert_eq!(
            player.output(Surface::Video).map(|level| level.volume),
            Some(0.7)
        );
        for _ in 0..20 {
            player.volume_down();
        }
        assert_eq!(
            player.output(Surface::Video).map(|level| level.volume),
            Some(0.0)
        );

        player.toggle_mute();
        player.play_at(&mut list, 1);
        assert_eq!(player.output(Surface::Audio), Some(OutputLevel::default()));
        assert_eq!(
            player.output(Surface::Video),
            Some(OutputLevel { volume: 0.0, muted: true })
        );
    }

    #[test]
    fn rejected_start_settles_paused() {
        let mut list = playlist(&["clip.webm"]);
        let mut player = controller();
        let actions = player.play_at(&mut list, 0);
        let Some(id) = played_handle(&actions) else {
            panic!("video should request playback");
        };

        assert!(player.on_playback_rejected(id, "NotAllowedError"));
        assert_eq!(player.state(), PlaybackState::Paused(MediaKind::Video));
        assert_eq!(list.cursor(), 0);

        let resumed = player.toggle_play_pause();
        assert!(matches!(resumed[..], [Action::Play { .. }]));
    }

    #[test]
    fn stale_reports_are_ignored() {
        let mut list = playlist(&["a.mp3", "b.mp3", "c.mp3"]);
        let mut player = controller();
        let first = played_handle(&player.play_at(&mut list, 0));
        player.play_at(&mut list, 1);

        let Some(stale) = first else {
            panic!("audio should request playback");
        };
        assert!(!player.on_playback_rejected(stale, "late"));
        assert!(!player.on_playback_paused(stale));
        assert!(player.on_media_ended(&mut list, stale).is_empty());
        assert_eq!(list.cursor(), 1);
        assert!(player.state().is_playing());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            let bytes = self.0.lock().map(|buf| buf.clone()).unwrap_or_default();
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Ok(mut inner) = self.0.lock() {
                inner.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn only_current_rejections_warn() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut list = playlist(&["a.mp3", "b.mp3"]);
            let mut player = controller();
            let Some(stale) = played_handle(&player.play_at(&mut list, 0)) else {
                panic!("audio should request playback");
            };
            let Some(current) = played_handle(&player.play_at(&mut list, 1)) else {
                panic!("audio should request playback");
            };

            assert!(!player.on_playback_rejected(stale, "late"));
            assert!(!logs.text().contains("WARN"));

            assert!(player.on_playback_rejected(current, "NotAllowedError"));
        });

        let text = logs.text();
        assert!(text.contains("rejection for inactive handle ignored"));
        assert_eq!(text.matches("WARN").count(), 1);
        assert!(text.contains("playback start rejected"));
    }

    #[test]
    fn media_end_chains_to_next_with_wrap() {
        let mut list = playlist(&["a.mp3", "b.mp4"]);
        let mut player = controller();
        player.play_at(&mut list, 1);
        let current = player.active_handle().map(|handle| handle.id);

        let Some(id) = current else {
            panic!("entry should hold a handle");
        };
        let actions = player.on_media_ended(&mut list, id);

        assert_eq!(list.cursor(), 0);
        assert!(matches!(
            actions[1],
            Action::Present { surface: Surface::Audio, .. }
        ));
    }

    #[test]
    fn failed_acquire_leaves_entry_current_and_paused() {
        let mut list = playlist(&["a.mp4", "b.mp3"]);
        let mut player = PlaybackController::new(Box::new(ExhaustedBroker), DEFAULT_VOLUME_STEP);

        let actions = player.play_at(&mut list, 1);

        assert_eq!(actions, [Action::HideSurfaces]);
        assert_eq!(list.cursor(), 1);
        assert_eq!(player.state(), PlaybackState::Paused(MediaKind::Audio));
        assert!(player.visible_surface().is_none());
        assert!(player.toggle_play_pause().is_empty());
    }

    #[test]
    fn stop_releases_and_goes_idle() {
        let mut list = playlist(&["a.mp4"]);
        let mut player = controller();
        player.play_at(&mut list, 0);

        assert_eq!(player.stop(), [Action::HideSurfaces]);
        assert_eq!(player.state(), PlaybackState::Idle);
        assert_eq!(player.broker().live_count(), 0);
        assert!(player.active_handle().is_none());
    }
}
