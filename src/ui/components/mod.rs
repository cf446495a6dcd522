//! Composable text components.
//!
//! Each component appends its lines to a shared `String` buffer.
//!
//! # Components
//!
//! - [`header`]: Playlist title with entry count
//! - [`status`]: Visible surface and transport status
//! - [`playlist`]: One line per entry, current entry highlighted
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Message shown while nothing is loaded
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Now showing]      ┐ player section
//! [Status]           ┘
//! [Border]
//! [Playlist rows]      playlist section
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod playlist;
mod status;

pub use empty::render_empty_state;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::PlayerViewModel;

use footer::render_footer;
use header::render_header;
use playlist::render_rows;
use status::{render_now_showing, render_status};

fn render_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders header, the visible sections, and footer.
pub fn render_player_layout(out: &mut String, vm: &PlayerViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    render_border(out, &theme.colors.border, cols);

    if vm.player_visible {
        render_now_showing(out, vm.now_showing.as_ref(), theme, cols);
        if let Some(status) = &vm.status {
            render_status(out, status, theme, cols);
        }
        render_border(out, &theme.colors.border, cols);
    }

    if vm.playlist_visible {
        render_rows(out, &vm.rows, theme, cols);
        render_border(out, &theme.colors.border, cols);
    }

    render_footer(out, &vm.footer, theme, cols);
}
