//! Runtime configuration.
//!
//! Everything is supplied on the command line; nothing is read from disk
//! apart from the optional avatar images.

use std::path::{Path, PathBuf};

use crate::chat::{ChatSession, Role};

/// Default window title.
pub const DEFAULT_TITLE: &str = "Chat";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{role} avatar not found: {}", path.display())]
    AvatarNotFound { role: Role, path: PathBuf },
    #[error("{role} avatar is not a file: {}", path.display())]
    AvatarNotAFile { role: Role, path: PathBuf },
}

/// Shared application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Enable verbose (trace-level) logging
    pub verbose: bool,
    /// Window title
    pub title: String,
    /// Image shown next to user messages
    pub user_avatar: Option<PathBuf>,
    /// Image shown next to assistant messages
    pub assistant_avatar: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            verbose: false,
            title: DEFAULT_TITLE.to_string(),
            user_avatar: None,
            assistant_avatar: None,
        }
    }
}

impl AppConfig {
    /// Default `EnvFilter` directive for the configured verbosity.
    ///
    /// `RUST_LOG` still takes precedence when set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else if self.debug {
            "debug,gpui_component=warn"
        } else {
            "warn"
        }
    }

    /// Check that configured avatar paths point at files.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.user_avatar {
            check_avatar(Role::User, path)?;
        }
        if let Some(path) = &self.assistant_avatar {
            check_avatar(Role::Assistant, path)?;
        }
        Ok(())
    }

    /// Build a fresh session with this configuration's avatars.
    pub fn new_session(&self) -> ChatSession {
        let mut session = ChatSession::new();
        session.set_avatar(Role::User, self.user_avatar.clone());
        session.set_avatar(Role::Assistant, self.assistant_avatar.clone());
        session
    }
}

fn check_avatar(role: Role, path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::AvatarNotFound {
            role,
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(ConfigError::AvatarNotAFile {
            role,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
