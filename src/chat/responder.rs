//! Response generation
//!
//! The [`Responder`] trait is the seam where a real inference backend plugs
//! in. [`EchoResponder`] is the placeholder default: it only repeats what the
//! user said.

use super::message::Message;

/// Errors a responder may report. The session turns these into an assistant
/// message rather than letting them escape.
#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("response generation failed: {0}")]
    Failed(String),
}

/// Produces an assistant reply for the most recent user text.
///
/// `history` is the conversation so far, already including the user message
/// that `user_text` came from.
pub trait Responder {
    fn respond(&self, history: &[Message], user_text: &str) -> Result<String, ResponderError>;
}

impl<F> Responder for F
where
    F: Fn(&[Message], &str) -> Result<String, ResponderError>,
{
    fn respond(&self, history: &[Message], user_text: &str) -> Result<String, ResponderError> {
        self(history, user_text)
    }
}

/// Canned reply that embeds the user text verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoResponder;

impl EchoResponder {
    pub fn reply_for(user_text: &str) -> String {
        format!("我收到了您的訊息：'{user_text}'。")
    }
}

impl Responder for EchoResponder {
    fn respond(&self, _history: &[Message], user_text: &str) -> Result<String, ResponderError> {
        Ok(Self::reply_for(user_text))
    }
}
