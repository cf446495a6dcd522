//! Now-showing and transport status lines.

use crate::domain::Surface;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusInfo, SurfaceInfo};

const fn surface_label(surface: Surface) -> &'static str {
    match surface {
        Surface::Video => "video",
        Surface::Audio => "audio",
        Surface::Image => "image",
    }
}

/// Appends the line naming the visible surface and its caption.
///
/// Entries without a surface get a dimmed placeholder instead.
pub fn render_now_showing(out: &mut String, info: Option<&SurfaceInfo>, theme: &Theme, cols: usize) {
    let line = info.map_or_else(
        || "[no preview]".to_string(),
        |info| format!("[{}] {}", surface_label(info.surface), info.title),
    );

    if info.is_none() {
        out.push_str(Theme::dim());
    }
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&truncate(&line, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends the status line: name, position, and playback flags.
///
/// ```text
/// song.mp3 (2/3)  ▶ playing  vol 80%  muted  fullscreen
/// ```
pub fn render_status(out: &mut String, status: &StatusInfo, theme: &Theme, cols: usize) {
    let mut line = status.text.clone();

    if status.has_transport {
        line.push_str(if status.playing { "  ▶ playing" } else { "  ⏸ paused" });
        if let Some(volume) = status.volume {
            line.push_str(&format!("  vol {:.0}%", volume * 100.0));
        }
        if status.muted {
            line.push_str("  muted");
        }
    }
    if status.fullscreen {
        line.push_str("  fullscreen");
    }

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.status_fg));
    out.push_str(&truncate(&line, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
