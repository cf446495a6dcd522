//! Empty state shown while the playlist has no entries.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Appends the two-line empty-state message, both lines centred.
///
/// ```text
///
///                 No media loaded
///   Choose files or drop video, audio, and images here
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    push_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
