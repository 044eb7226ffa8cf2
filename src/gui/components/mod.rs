//! UI Components for the GUI

mod message_bubble;

pub use message_bubble::{message_bubble, AVATAR_SIZE};
