//! Footer line with keybinding hints.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Appends the dimmed keybinding hints, centred and truncated to `cols`.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &footer.keybindings, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
