//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from [`AppState`], then hand
//! it to the components. Output is returned as a `String` of ANSI-styled lines;
//! the host decides where it goes.
//!
//! # Example
//!
//! ```rust
//! use mediadeck::{initialize, ui::render, Config};
//!
//! let state = initialize(&Config::default());
//! let screen = render(&state, 60);
//! assert!(!screen.contains("Playlist ("));
//! assert!(screen.contains("No media loaded"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PlayerViewModel;

/// Renders the current state as themed text, `cols` characters wide.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a pre-computed view model.
///
/// Empty playlists get the empty-state message in place of the player and
/// playlist sections.
#[must_use]
pub fn render_viewmodel(vm: &PlayerViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();

    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(&mut out, empty, theme, cols);
        return out;
    }

    components::render_player_layout(&mut out, vm, theme, cols);
    out
}
