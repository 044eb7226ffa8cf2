//! Theme and color definitions for the GUI

use gpui::{rgb, Rgba};

/// Color theme for the chat window
#[derive(Clone)]
pub struct Theme {
    /// Background color for the main window
    pub background: Rgba,
    /// Background color for the input area
    pub panel_background: Rgba,
    /// Border color
    pub border: Rgba,
    /// Primary text color
    pub text: Rgba,
    /// Secondary/muted text color
    pub text_muted: Rgba,
    /// Accent color for the send button
    pub accent: Rgba,
    /// User message bubble background
    pub user_bubble: Rgba,
    /// Assistant message bubble background
    pub assistant_bubble: Rgba,
    /// Fill used when a message has no avatar image
    pub avatar_placeholder: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light theme (default)
    pub fn light() -> Self {
        Self {
            background: rgb(0xffffff),
            panel_background: rgb(0xf3f3f3),
            border: rgb(0xe5e5e5),
            text: rgb(0x1e1e1e),
            text_muted: rgb(0x6e6e6e),
            accent: rgb(0x0078d4),
            user_bubble: rgb(0xf5f5f5),
            assistant_bubble: rgb(0xffffff),
            avatar_placeholder: rgb(0xdddddd),
        }
    }
}
