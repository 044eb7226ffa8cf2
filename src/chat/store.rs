//! Append-only message storage for a single chat session.

use std::ops::Index;

use super::message::Message;

/// Ordered collection of every message in the session, oldest first.
///
/// Entries can't be removed or edited; the length only ever grows.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its index.
    pub fn push(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }
}

impl Index<usize> for MessageStore {
    type Output = Message;

    fn index(&self, index: usize) -> &Self::Output {
        &self.messages[index]
    }
}

impl<'a> IntoIterator for &'a MessageStore {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Role;

    #[test]
    fn test_new_store_is_empty() {
        let store = MessageStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.last().is_none());
    }

    #[test]
    fn test_push_returns_index_and_preserves_order() {
        let mut store = MessageStore::new();
        assert_eq!(store.push(Message::user("one")), 0);
        assert_eq!(store.push(Message::assistant("two")), 1);
        assert_eq!(store.push(Message::user("three")), 2);

        let contents: Vec<_> = store.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
        assert_eq!(store[1].role(), Role::Assistant);
        assert_eq!(store.last().map(|m| m.content()), Some("three"));
    }

    #[test]
    fn test_length_grows_by_number_of_pushes() {
        let mut store = MessageStore::new();
        store.push(Message::user("prior"));
        let before = store.len();

        for i in 0..25 {
            store.push(Message::user(format!("msg {i}")));
        }

        assert_eq!(store.len(), before + 25);
        for (i, msg) in store.iter().skip(before).enumerate() {
            assert_eq!(msg.content(), format!("msg {i}"));
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let store = MessageStore::new();
        assert!(store.get(0).is_none());
    }
}
