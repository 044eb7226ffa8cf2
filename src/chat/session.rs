//! Chat session state
//!
//! Holds everything the chat window needs that is independent of the GUI
//! toolkit: the message store, the draft being typed, the responder and the
//! scroll bookkeeping. The window forwards input into here and renders what
//! comes out.

use std::collections::HashMap;
use std::path::PathBuf;

use super::message::{Message, Role};
use super::responder::{EchoResponder, Responder};
use super::scroll::ScrollModel;
use super::store::MessageStore;

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was empty after trimming; nothing changed.
    Ignored,
    /// A user message and its reply were appended at these indices.
    Sent { user: usize, reply: usize },
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent { .. })
    }
}

pub struct ChatSession {
    store: MessageStore,
    draft: String,
    responder: Box<dyn Responder>,
    avatars: HashMap<Role, PathBuf>,
    scroll: ScrollModel,
}

impl ChatSession {
    /// New session with the echo responder.
    pub fn new() -> Self {
        Self::with_responder(EchoResponder)
    }

    pub fn with_responder(responder: impl Responder + 'static) -> Self {
        Self {
            store: MessageStore::new(),
            draft: String::new(),
            responder: Box::new(responder),
            avatars: HashMap::new(),
            scroll: ScrollModel::new(),
        }
    }

    /// Swap the response backend. Existing messages are kept.
    pub fn set_responder(&mut self, responder: impl Responder + 'static) {
        self.responder = Box::new(responder);
    }

    /// Avatar used for every later message from `role`.
    pub fn set_avatar(&mut self, role: Role, avatar: Option<PathBuf>) {
        match avatar {
            Some(path) => {
                self.avatars.insert(role, path);
            }
            None => {
                self.avatars.remove(&role);
            }
        }
    }

    pub fn messages(&self) -> &MessageStore {
        &self.store
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn scroll(&self) -> &ScrollModel {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollModel {
        &mut self.scroll
    }

    /// Append a message and request a scroll to the bottom.
    ///
    /// No validation is done on `content`; empty text is accepted.
    pub fn append_message(&mut self, role: Role, content: impl Into<String>) -> usize {
        let message = Message::new(role, content).with_avatar(self.avatars.get(&role).cloned());
        let index = self.store.push(message);
        self.scroll.request_bottom(self.store.len());
        tracing::debug!(index, %role, "Appended message");
        index
    }

    /// Send the current draft.
    pub fn submit(&mut self) -> SubmitOutcome {
        let text = self.draft.trim();
        if text.is_empty() {
            tracing::trace!("Ignoring empty submit");
            return SubmitOutcome::Ignored;
        }

        let text = text.to_string();
        let user = self.append_message(Role::User, text.as_str());
        self.draft.clear();
        let reply = self.generate_response(&text);
        SubmitOutcome::Sent { user, reply }
    }

    /// Ask the responder for a reply to `user_text` and append it.
    ///
    /// A responder failure is shown to the user as an assistant message.
    pub fn generate_response(&mut self, user_text: &str) -> usize {
        let content = match self.responder.respond(self.store.as_slice(), user_text) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Responder failed");
                format!("⚠ 無法產生回覆：{e}")
            }
        };
        self.append_message(Role::Assistant, content)
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ResponderError;

    fn entries(session: &ChatSession) -> Vec<(Role, String)> {
        session
            .messages()
            .iter()
            .map(|m| (m.role(), m.content().to_string()))
            .collect()
    }

    fn submit_text(session: &mut ChatSession, text: &str) -> SubmitOutcome {
        session.set_draft(text);
        session.submit()
    }

    // ==========================================================================
    // Submit
    // ==========================================================================

    #[test]
    fn test_submit_hello() {
        let mut session = ChatSession::new();
        let outcome = submit_text(&mut session, "Hello");

        assert_eq!(outcome, SubmitOutcome::Sent { user: 0, reply: 1 });
        assert_eq!(
            entries(&session),
            vec![
                (Role::User, "Hello".to_string()),
                (Role::Assistant, "我收到了您的訊息：'Hello'。".to_string()),
            ]
        );
        assert!(session.draft().is_empty());
    }

    #[test]
    fn test_submit_whitespace_is_ignored() {
        let mut session = ChatSession::new();
        assert_eq!(submit_text(&mut session, "   "), SubmitOutcome::Ignored);
        assert!(session.messages().is_empty());
        // The draft is left alone too
        assert_eq!(session.draft(), "   ");
        assert!(!session.scroll().is_pending());
    }

    #[test]
    fn test_submit_empty_and_newlines_ignored() {
        let mut session = ChatSession::new();
        for input in ["", "\n", " \t\n  "] {
            assert!(!submit_text(&mut session, input).is_sent());
            assert_eq!(session.draft(), input);
        }
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_submit_trims_surrounding_whitespace() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "  hi there \n");

        let first = session.messages().get(0).unwrap();
        assert_eq!(first.content(), "hi there");
        assert_eq!(
            session.messages()[1].content(),
            EchoResponder::reply_for("hi there")
        );
    }

    #[test]
    fn test_two_submits_keep_order() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "A");
        assert_eq!(
            submit_text(&mut session, "B"),
            SubmitOutcome::Sent { user: 2, reply: 3 }
        );

        assert_eq!(
            entries(&session),
            vec![
                (Role::User, "A".to_string()),
                (Role::Assistant, EchoResponder::reply_for("A")),
                (Role::User, "B".to_string()),
                (Role::Assistant, EchoResponder::reply_for("B")),
            ]
        );
    }

    // ==========================================================================
    // Append
    // ==========================================================================

    #[test]
    fn test_append_allows_empty_content() {
        let mut session = ChatSession::new();
        assert_eq!(session.append_message(Role::Assistant, ""), 0);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].content(), "");
    }

    #[test]
    fn test_append_n_times_grows_by_n() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "seed");
        let before = session.messages().len();

        for i in 0..10 {
            let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
            session.append_message(role, format!("{i}"));
        }

        assert_eq!(session.messages().len(), before + 10);
        let tail: Vec<_> = session
            .messages()
            .iter()
            .skip(before)
            .map(|m| m.content().to_string())
            .collect();
        let expected: Vec<_> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(tail, expected);
    }

    #[test]
    fn test_append_attaches_role_avatar() {
        let mut session = ChatSession::new();
        session.set_avatar(Role::User, Some(PathBuf::from("me.png")));

        submit_text(&mut session, "x");
        assert_eq!(
            session.messages()[0].avatar(),
            Some(std::path::Path::new("me.png"))
        );
        assert!(session.messages()[1].avatar().is_none());

        session.set_avatar(Role::User, None);
        session.append_message(Role::User, "y");
        assert!(session.messages()[2].avatar().is_none());
    }

    // ==========================================================================
    // Scrolling
    // ==========================================================================

    #[test]
    fn test_scroll_reaches_bottom_after_append() {
        let mut session = ChatSession::new();
        session.scroll_mut().layout_settled(200.0, 0);
        session.scroll_mut().scroll_to(50.0);

        session.append_message(Role::User, "new");
        assert!(session.scroll().is_pending());

        session.scroll_mut().layout_settled(260.0, 1);
        assert_eq!(session.scroll().offset(), 260.0);
        assert!(session.scroll().is_at_bottom());
    }

    #[test]
    fn test_submit_waits_for_layout_with_both_bubbles() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "A");
        session.scroll_mut().layout_settled(300.0, 2);
        assert!(session.scroll().is_at_bottom());

        submit_text(&mut session, "B");

        // A pass that still reports the pre-submit content must not
        // consume the request
        assert!(!session.scroll_mut().layout_settled(300.0, 2));
        assert!(session.scroll().is_pending());

        // Only the user bubble laid out so far
        assert!(!session.scroll_mut().layout_settled(360.0, 3));
        assert!(session.scroll().is_pending());

        assert!(session.scroll_mut().layout_settled(420.0, 4));
        assert_eq!(session.scroll().offset(), 420.0);
        assert!(!session.scroll().is_pending());
    }

    // ==========================================================================
    // Responder
    // ==========================================================================

    #[test]
    fn test_custom_responder_sees_history() {
        let responder = |history: &[Message], text: &str| -> Result<String, ResponderError> {
            Ok(format!("#{} {}", history.len(), text.to_uppercase()))
        };
        let mut session = ChatSession::with_responder(responder);

        submit_text(&mut session, "abc");
        assert_eq!(session.messages()[1].content(), "#1 ABC");
        submit_text(&mut session, "d");
        assert_eq!(session.messages()[3].content(), "#3 D");
    }

    #[test]
    fn test_responder_failure_becomes_assistant_message() {
        let mut session = ChatSession::new();
        session.set_responder(|_: &[Message], _: &str| -> Result<String, ResponderError> {
            Err(ResponderError::Unavailable("offline".to_string()))
        });

        let outcome = submit_text(&mut session, "ping");
        assert!(outcome.is_sent());
        assert_eq!(session.messages().len(), 2);

        let reply = &session.messages()[1];
        assert_eq!(reply.role(), Role::Assistant);
        assert!(reply.content().contains("backend unavailable: offline"));
        assert!(session.draft().is_empty());
    }
}
