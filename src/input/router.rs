//! Translation of raw host input into [`Event`]s.
//!
//! A `Some` result from a key mapping means the key was handled and the host
//! should suppress the key's default action (scrolling, activating buttons).

use crate::app::{AppState, BatchOrigin, Event};
use crate::domain::CandidateFile;

use super::keys::Key;

/// Where a pointer activation landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The body of a playlist row.
    Row(usize),
    /// The remove control inside a playlist row.
    RemoveButton(usize),
}

/// Transport and chrome buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    PlayPause,
    Next,
    Fullscreen,
    Clear,
    OpenPicker,
}

/// Maps a global key press. Inactive while the playlist is empty.
#[must_use]
pub fn map_key(state: &AppState, key: Key) -> Option<Event> {
    if state.playlist.is_empty() {
        return None;
    }

    let event = match key {
        Key::Space => Event::TogglePlayPause,
        Key::ArrowLeft => Event::Previous,
        Key::ArrowRight => Event::Next,
        Key::ArrowUp => Event::VolumeUp,
        Key::ArrowDown => Event::VolumeDown,
        Key::Char('f' | 'F') => Event::ToggleFullscreen,
        Key::Char('m' | 'M') => Event::ToggleMute,
        Key::Enter | Key::Char(_) | Key::Other => return None,
    };
    tracing::trace!(?key, ?event, "key mapped");
    Some(event)
}

/// Maps a key pressed while playlist row `index` has focus.
///
/// Enter and Space play the row; anything else falls through to [`map_key`].
#[must_use]
pub fn map_row_key(index: usize, key: Key) -> Option<Event> {
    match key {
        Key::Enter | Key::Space => Some(Event::PlayAt(index)),
        _ => None,
    }
}

/// Maps a pointer activation. A remove control never also selects its row.
#[must_use]
pub const fn map_pointer(target: PointerTarget) -> Event {
    match target {
        PointerTarget::Row(index) => Event::PlayAt(index),
        PointerTarget::RemoveButton(index) => Event::RemoveAt(index),
    }
}

#[must_use]
pub const fn map_control(control: Control) -> Event {
    match control {
        Control::Previous => Event::Previous,
        Control::PlayPause => Event::TogglePlayPause,
        Control::Next => Event::Next,
        Control::Fullscreen => Event::ToggleFullscreen,
        Control::Clear => Event::Clear,
        Control::OpenPicker => Event::OpenFilePicker,
    }
}

/// Wraps a picked or dropped batch. Both origins take the same admission path.
#[must_use]
pub fn files_event(origin: BatchOrigin, files: Vec<CandidateFile>) -> Event {
    Event::FilesAdded { origin, files }
}

/// Whether the drop target accepts a drag hovering over it.
///
/// Always true: admission filtering happens on drop, per file name.
#[must_use]
pub const fn accepts_drag_over() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn loaded_state() -> AppState {
        let mut state = crate::initialize(&Config::default());
        state.playlist.append([CandidateFile::new("a.mp4", vec![0_u8])]);
        state
    }

    #[test]
    fn keys_are_ignored_while_empty() {
        let state = crate::initialize(&Config::default());
        for key in [Key::Space, Key::ArrowLeft, Key::Char('f'), Key::ArrowUp] {
            assert_eq!(map_key(&state, key), None);
        }
    }

    #[test]
    fn keyboard_contract() {
        let state = loaded_state();
        let cases = [
            (Key::Space, Event::TogglePlayPause),
            (Key::ArrowLeft, Event::Previous),
            (Key::ArrowRight, Event::Next),
            (Key::Char('f'), Event::ToggleFullscreen),
            (Key::Char('F'), Event::ToggleFullscreen),
            (Key::Char('m'), Event::ToggleMute),
            (Key::Char('M'), Event::ToggleMute),
            (Key::ArrowUp, Event::VolumeUp),
            (Key::ArrowDown, Event::VolumeDown),
        ];

        for (key, expected) in cases {
            assert_eq!(map_key(&state, key), Some(expected), "{key:?}");
        }
        assert_eq!(map_key(&state, Key::Char('x')), None);
        assert_eq!(map_key(&state, Key::Enter), None);
    }

    #[test]
    fn row_keys_and_pointer_targets() {
        assert_eq!(map_row_key(3, Key::Enter), Some(Event::PlayAt(3)));
        assert_eq!(map_row_key(3, Key::Space), Some(Event::PlayAt(3)));
        assert_eq!(map_row_key(3, Key::ArrowDown), None);

        assert_eq!(map_pointer(PointerTarget::Row(1)), Event::PlayAt(1));
        assert_eq!(map_pointer(PointerTarget::RemoveButton(1)), Event::RemoveAt(1));
    }

    #[test]
    fn controls_route_to_transport() {
        assert_eq!(map_control(Control::Previous), Event::Previous);
        assert_eq!(map_control(Control::PlayPause), Event::TogglePlayPause);
        assert_eq!(map_control(Control::Next), Event::Next);
        assert_eq!(map_control(Control::Fullscreen), Event::ToggleFullscreen);
        assert_eq!(map_control(Control::Clear), Event::Clear);
        assert_eq!(map_control(Control::OpenPicker), Event::OpenFilePicker);
        assert!(accepts_drag_over());
    }
}
