//! Theme metadata passed through to the renderer.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Background color in dark mode.
pub const DARK_BACKGROUND: Color = Color::from_rgba8(0x15, 0x15, 0x1e, 255);
/// Background color in light mode.
pub const LIGHT_BACKGROUND: Color = Color::from_rgba8(0xfe, 0xfe, 0xfe, 255);

/// Free-form metadata handed to the renderer alongside the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub is_dark_mode: bool,
}

/// Styling handed to the renderer; derived entirely from [`Meta`].
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
}

impl Meta {
    /// Derive the theme for this metadata.
    pub fn theme(&self) -> Theme {
        Theme {
            background: if self.is_dark_mode {
                DARK_BACKGROUND
            } else {
                LIGHT_BACKGROUND
            },
        }
    }
}
