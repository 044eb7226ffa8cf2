//! Chat message types
//!
//! A message is created once and never mutated afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Sender label shown above the bubble text.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    role: Role,
    content: String,
    avatar: Option<PathBuf>,
    created_at: DateTime<Local>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            avatar: None,
            created_at: Local::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Attach an avatar image. Only used while building the message.
    pub fn with_avatar(mut self, avatar: Option<PathBuf>) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn avatar(&self) -> Option<&Path> {
        self.avatar.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Local send time as `HH:MM`, shown next to the sender label.
    pub fn time_label(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}
