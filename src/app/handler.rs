//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which the host feeds user
//! gestures and platform reports into the core. It mutates [`AppState`] and
//! returns whether the view must be re-rendered, plus the ordered side effects
//! for the host to run.
//!
//! # Event Types
//!
//! - **Playlist**: `FilesAdded`, `PlayAt`, `RemoveAt`, `Clear`
//! - **Transport**: `Next`, `Previous`, `TogglePlayPause`, `ToggleFullscreen`,
//!   `ToggleMute`, `VolumeUp`, `VolumeDown`
//! - **Chrome**: `OpenFilePicker`, `RowFocused`
//! - **Platform reports**: `PlaybackStarted`, `PlaybackPaused`,
//!   `PlaybackRejected`, `MediaEnded`, `FullscreenChanged`, `FullscreenDenied`
//!
//! Events are processed strictly in arrival order; each one completes its state
//! mutation before the next is looked at.
//!
//! # Example
//!
//! ```rust
//! use mediadeck::app::{handle_event, BatchOrigin, Event};
//! use mediadeck::domain::CandidateFile;
//! use mediadeck::Config;
//!
//! let mut state = mediadeck::initialize(&Config::default());
//! let files = vec![CandidateFile::new("clip.mp4", vec![0_u8; 4])];
//! let (render, actions) =
//!     handle_event(&mut state, &Event::FilesAdded { origin: BatchOrigin::Drop, files })?;
//! assert!(render);
//! assert!(!actions.is_empty());
//! # Ok::<(), mediadeck::domain::MediadeckError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::CandidateFile;
use crate::resources::HandleId;

use super::playlist::Removal;

/// Where a batch of candidate files came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOrigin {
    /// The file-selection dialog. Its control is reset after the batch.
    Picker,
    /// A drag-and-drop onto the drop zone.
    Drop,
}

/// Inputs the core reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A batch of files was selected or dropped.
    FilesAdded {
        origin: BatchOrigin,
        files: Vec<CandidateFile>,
    },
    /// Make the entry at this index current and present it.
    PlayAt(usize),
    /// Remove the entry at this index.
    RemoveAt(usize),
    /// Empty the playlist and stop everything.
    Clear,

    Next,
    Previous,
    TogglePlayPause,
    ToggleFullscreen,
    ToggleMute,
    VolumeUp,
    VolumeDown,

    /// The "add files" button was pressed.
    OpenFilePicker,
    /// A playlist row received keyboard focus.
    RowFocused(usize),

    /// The host started playback on the surface bound to this handle.
    PlaybackStarted(HandleId),
    /// The host paused playback without being asked to.
    PlaybackPaused(HandleId),
    /// The platform refused to start playback for this handle.
    PlaybackRejected { handle: HandleId, reason: String },
    /// Timed media bound to this handle played to its end.
    MediaEnded(HandleId),
    /// The platform entered or left fullscreen.
    FullscreenChanged(bool),
    /// The platform refused a fullscreen request.
    FullscreenDenied { reason: String },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the view model changed, and the side effects for
/// the host to execute in order.
///
/// # Errors
///
/// Reserved for host-facing failures; every current event path recovers
/// locally and logs instead.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventName(event)).entered();

    let AppState {
        playlist, player, ..
    } = state;

    match event {
        Event::FilesAdded { origin, files } => {
            let was_empty = playlist.is_empty();
            let appended = playlist.append(files.iter().cloned());

            tracing::debug!(
                offered = files.len(),
                appended,
                total = playlist.len(),
                ?origin,
                "files added"
            );

            let mut actions = vec![];
            // Autoplay when the playlist was empty, or when the offered batch size,
            // rejected files included, matches the new length.
            if !playlist.is_empty() && (was_empty || files.len() == playlist.len()) {
                actions.extend(player.play_at(playlist, 0));
            }
            if *origin == BatchOrigin::Picker {
                actions.push(Action::ResetFilePicker);
            }

            Ok((appended > 0, actions))
        }
        Event::PlayAt(index) => {
            let actions = player.play_at(playlist, *index);
            Ok((!actions.is_empty(), actions))
        }
        Event::RemoveAt(index) => match playlist.remove_at(*index) {
            Removal::Ignored => Ok((false, vec![])),
            Removal::Emptied => Ok((true, player.stop())),
            Removal::CurrentReplaced { cursor } => Ok((true, player.play_at(playlist, cursor))),
            Removal::CursorShifted { .. } | Removal::Unaffected => Ok((true, vec![])),
        },
        Event::Clear => {
            tracing::debug!(cleared = playlist.len(), "playlist cleared");
            playlist.clear();
            Ok((true, player.stop()))
        }
        Event::Next => {
            let actions = player.next(playlist);
            Ok((!actions.is_empty(), actions))
        }
        Event::Previous => {
            let actions = player.previous(playlist);
            Ok((!actions.is_empty(), actions))
        }
        Event::TogglePlayPause => {
            let actions = player.toggle_play_pause();
            Ok((!actions.is_empty(), actions))
        }
        Event::ToggleFullscreen => Ok((false, player.toggle_fullscreen())),
        Event::ToggleMute => {
            let actions = player.toggle_mute();
            Ok((!actions.is_empty(), actions))
        }
        Event::VolumeUp => {
            let actions = player.volume_up();
            Ok((!actions.is_empty(), actions))
        }
        Event::VolumeDown => {
            let actions = player.volume_down();
            Ok((!actions.is_empty(), actions))
        }
        Event::OpenFilePicker => Ok((false, vec![Action::OpenFilePicker])),
        Event::RowFocused(index) => {
            if *index >= playlist.len() {
                tracing::debug!(index, "focus on missing row ignored");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::ScrollIntoView(*index)]))
        }
        Event::PlaybackStarted(handle) => Ok((player.on_playback_started(*handle), vec![])),
        Event::PlaybackPaused(handle) => Ok((player.on_playback_paused(*handle), vec![])),
        Event::PlaybackRejected { handle, reason } => {
            Ok((player.on_playback_rejected(*handle, reason), vec![]))
        }
        Event::MediaEnded(handle) => {
            let actions = player.on_media_ended(playlist, *handle);
            Ok((!actions.is_empty(), actions))
        }
        Event::FullscreenChanged(fullscreen) => {
            Ok((player.on_fullscreen_changed(*fullscreen), vec![]))
        }
        Event::FullscreenDenied { reason } => {
            player.on_fullscreen_denied(reason);
            Ok((false, vec![]))
        }
    }
}

/// Span label that leaves file payloads out of the trace.
struct EventName<'a>(&'a Event);

impl std::fmt::Debug for EventName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::FilesAdded { origin, files } => f
                .debug_struct("FilesAdded")
                .field("origin", origin)
                .field("files", &files.len())
                .finish(),
            other => std::fmt::Debug::fmt(other, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PlaybackState;
    use crate::domain::{MediaKind, Surface};
    use crate::Config;

    fn state() -> AppState {
        crate::initialize(&Config::default())
    }

    fn batch(origin: BatchOrigin, names: &[&str]) -> Event {
        Event::FilesAdded {
            origin,
            files: names
                .iter()
                .map(|name| CandidateFile::new(*name, vec![7_u8; 8]))
                .collect(),
        }
    }

    fn run(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
        match handle_event(state, event) {
            Ok(outcome) => outcome,
            Err(e) => panic!("event {event:?} failed: {e}"),
        }
    }

    #[test]
    fn first_batch_autoplays_first_entry() {
        let mut state = state();
        let (render, actions) = run(
            &mut state,
            &batch(BatchOrigin::Drop, &["video1.mp4", "readme.txt", "audio1.mp3"]),
        );

        assert!(render);
        assert_eq!(state.playlist.len(), 2);
        assert_eq!(state.playlist.cursor(), 0);
        assert!(matches!(
            actions[..],
            [Action::HideSurfaces, Action::Present { surface: Surface::Video, .. }, Action::Play { .. }]
        ));
    }

    #[test]
    fn later_batch_does_not_interrupt() {
        let mut state = state();
        run(&mut state, &batch(BatchOrigin::Drop, &["a.mp3"]));
        run(&mut state, &Event::Next);

        let (render, actions) = run(&mut state, &batch(BatchOrigin::Drop, &["b.mp3", "c.mp3"]));

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.playlist.len(), 3);
        assert_eq!(state.playlist.cursor(), 0);
    }

    #[test]
    fn batch_as_large_as_playlist_restarts_from_first() {
        let mut state = state();
        run(&mut state, &batch(BatchOrigin::Drop, &["a.mp4"]));
        run(&mut state, &Event::Next);

        let (render, actions) = run(&mut state, &batch(BatchOrigin::Drop, &["b.mp4", "x.txt"]));

        assert!(render);
        assert_eq!(state.playlist.len(), 2);
        assert_eq!(state.playlist.cursor(), 0);
        assert!(matches!(
            actions[..],
            [Action::HideSurfaces, Action::Present { surface: Surface::Video, .. }, Action::Play { .. }]
        ));
        assert_eq!(state.player.broker().live_count(), 1);
    }

    #[test]
    fn picker_batch_resets_picker_last() {
        let mut state = state();
        let (_, actions) = run(&mut state, &batch(BatchOrigin::Picker, &["a.png"]));
        assert_eq!(actions.last(), Some(&Action::ResetFilePicker));

        let (render, actions) = run(&mut state, &batch(BatchOrigin::Picker, &["notes.pdf"]));
        assert!(!render);
        assert_eq!(actions, [Action::ResetFilePicker]);
    }

    #[test]
    fn rejected_batch_leaves_empty_playlist_idle() {
        let mut state = state();
        let (render, actions) = run(&mut state, &batch(BatchOrigin::Drop, &["a.txt", "b.doc"]));

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.player.state(), PlaybackState::Idle);
    }

    #[test]
    fn removing_current_restarts_on_successor() {
        let mut state = state();
        run(&mut state, &batch(BatchOrigin::Drop, &["a.mp4", "b.mp3", "c.png"]));
        run(&mut state, &Event::PlayAt(1));

        let (render, actions) = run(&mut state, &Event::RemoveAt(1));

        assert!(render);
        assert_eq!(state.playlist.cursor(), 1);
        assert!(matches!(
            actions[..],
            [Action::HideSurfaces, Action::Present { surface: Surface::Image, .. }]
        ));
        assert_eq!(state.player.broker().live_count(), 1);
    }

    #[test]
    fn removing_other_entry_keeps_playback() {
        let mut state = state();
        run(&mut state, &batch(BatchOrigin::Drop, &["a.mp4", "b.mp3", "c.png"]));
        run(&mut state, &Event::PlayAt(2));

        let (render, actions) = run(&mut state, &Event::RemoveAt(0));

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.playlist.cursor(), 1);
        assert_eq!(state.player.state(), PlaybackState::Playing(MediaKind::Image));
    }

    #[test]
    fn removing_last_entry_stops_everything() {
        let mut state = state();
        run(&mut state, &batch(BatchOrigin::Drop, &["only.ogg"]));

        let (_, actions) = run(&mut state, &Event::RemoveAt(0));

        assert_eq!(actions, [Action::HideSurfaces]);
        assert!(state.playlist.is_empty());
        assert_eq!(state.player.state(), PlaybackState::Idle);
        assert_eq!(state.player.broker().live_count(), 0);
    }

    #[test]
    fn clear_on_empty_playlist_is_harmless() {
        let mut state = state();
        let (_, actions) = run(&mut state, &Event::Clear);
        assert_eq!(actions, [Action::HideSurfaces]);
        assert!(state.playlist.is_empty());
    }

    #[test]
    fn media_end_advances() {
        let mut state = state();
        let (_, actions) = run(&mut state, &batch(BatchOrigin::Drop, &["a.mp3", "b.mp3"]));
        let Some(handle) = actions.iter().find_map(|action| match action {
            Action::Play { handle, .. } => Some(*handle),
            _ => None,
        }) else {
            panic!("first entry should start playing");
        };

        let (render, _) = run(&mut state, &Event::MediaEnded(handle));

        assert!(render);
        assert_eq!(state.playlist.cursor(), 1);
    }

    #[test]
    fn row_focus_scrolls_only_existing_rows() {
        let mut state = state();
        run(&mut state, &batch(BatchOrigin::Drop, &["a.mp3"]));

        assert_eq!(run(&mut state, &Event::RowFocused(0)).1, [Action::ScrollIntoView(0)]);
        assert!(run(&mut state, &Event::RowFocused(3)).1.is_empty());
    }

    #[test]
    fn fullscreen_round_trip() {
        let mut state = state();
        run(&mut state, &batch(BatchOrigin::Drop, &["a.mp4"]));

        let (_, actions) = run(&mut state, &Event::ToggleFullscreen);
        assert!(matches!(actions[..], [Action::RequestFullscreen(_)]));

        let (render, _) = run(&mut state, &Event::FullscreenChanged(true));
        assert!(render);
        assert_eq!(run(&mut state, &Event::ToggleFullscreen).1, [Action::ExitFullscreen]);

        let (render, actions) = run(
            &mut state,
            &Event::FullscreenDenied {
                reason: "not allowed".into(),
            },
        );
        assert!(!render);
        assert!(actions.is_empty());
    }
}
