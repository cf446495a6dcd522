//! Playlist rows.
//!
//! Each row reads `▸ 🎬 name … ✕`: a cursor marker, the kind icon, the name,
//! and a remove marker pinned to the right edge.

use crate::ui::helpers::{char_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PlaylistRow;

const REMOVE_MARKER: &str = "✕";

/// Marker, icon, and the spaces around them.
const ROW_CHROME: usize = 7;

/// Appends one line per row, highlighting the current one.
pub fn render_rows(out: &mut String, rows: &[PlaylistRow], theme: &Theme, cols: usize) {
    let name_width = cols.saturating_sub(ROW_CHROME);

    for row in rows {
        let name = truncate(&row.name, name_width);
        let padding = name_width.saturating_sub(char_width(&name));

        if row.is_current {
            out.push_str(&Theme::fg(&theme.colors.current_fg));
            out.push_str(&Theme::bg(&theme.colors.current_bg));
            out.push_str("▸ ");
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str("  ");
        }

        out.push_str(row.icon);
        out.push(' ');
        out.push_str(&name);
        out.push_str(&" ".repeat(padding));
        out.push(' ');
        out.push_str(Theme::reset());

        out.push_str(&Theme::fg(&theme.colors.remove_fg));
        out.push_str(REMOVE_MARKER);
        out.push_str(Theme::reset());
        out.push('\n');
    }
}
