//! Input routing from host gestures to [`Event`](crate::app::Event)s.
//!
//! The host owns the widgets (file picker, drop zone, buttons, playlist rows);
//! this module decides what each gesture means. Feed the resulting event to
//! [`handle_event`](crate::app::handle_event).
//!
//! # Example
//!
//! ```rust
//! use mediadeck::app::{handle_event, Event};
//! use mediadeck::input::{map_key, Key};
//! use mediadeck::Config;
//!
//! let mut state = mediadeck::initialize(&Config::default());
//! // Nothing loaded yet: keys fall through to the host.
//! assert_eq!(map_key(&state, Key::from_dom_key(" ")), None);
//! # let _ = handle_event(&mut state, &Event::Clear);
//! ```

pub mod keys;
pub mod router;

pub use keys::Key;
pub use router::{
    accepts_drag_over, files_event, map_control, map_key, map_pointer, map_row_key, Control,
    PointerTarget,
};
