//! GUI module
//!
//! Provides the GPUI-based chat window.

mod app;
pub mod components;
mod theme;

pub use app::{register_keybindings, ChatWindow, Quit};
pub use theme::Theme;
