//! Chat model
//!
//! Toolkit-independent state behind the chat window: messages, the
//! append-only store, response generation and scroll bookkeeping.

mod message;
mod responder;
mod scroll;
mod session;
mod store;

pub use message::{Message, Role};
pub use responder::{EchoResponder, Responder, ResponderError};
pub use scroll::ScrollModel;
pub use session::{ChatSession, SubmitOutcome};
pub use store::MessageStore;
