//! Text rendering of the player and playlist.
//!
//! ```text
//! AppState → compute_viewmodel → PlayerViewModel → render → ANSI text
//! ```
//!
//! Hosts with their own markup can stop at [`PlayerViewModel`] and draw it
//! themselves; [`render`] is the built-in terminal-style rendition.
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable view state
//! - [`renderer`]: Entry point
//! - [`components`]: Per-section renderers
//! - [`helpers`]: Character-width aware padding and truncation
//! - [`theme`]: Colour schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, PlayerViewModel, PlaylistRow, StatusInfo, SurfaceInfo,
};
