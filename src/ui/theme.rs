//! Theme helpers for the slider demo
//!
//! Maps the built-in iced themes onto the few colors the demo needs.

use iced::{Color, Theme, color};

// Dark mode colors
mod dark {
    use super::*;
    pub const LABEL: Color = color!(0xffffff);
    pub const TRACK: Color = color!(0x767680, 0.24);
}

// Light mode colors
mod light {
    use super::*;
    pub const LABEL: Color = color!(0x1a1a1a);
    pub const TRACK: Color = color!(0x767680, 0.12);
}

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    match theme {
        Theme::Light => false,
        Theme::Dark => true,
        // Custom themes are judged by their background luminance.
        other => {
            let bg = other.palette().background;
            (bg.r + bg.g + bg.b) / 3.0 < 0.5
        }
    }
}

/// Default label color, used as the slider tint
pub fn label(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::LABEL
    } else {
        light::LABEL
    }
}

/// Subdued fill used for the slider track
pub fn track_fill(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TRACK
    } else {
        light::TRACK
    }
}
