use crate::models::chat::{ ChatMessage, Role };

/// Append-only log of the messages exchanged during one session.
///
/// Owned by the interactive loop and passed explicitly to whatever needs it.
/// Records are immutable once appended; ordering is insertion order. Nothing
/// is persisted, the log drops with the session.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self { messages: Vec::new() }
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Wholesale local reset. Remote state is the caller's problem.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert_eq!(conversation.len(), 0);
        assert!(conversation.last().is_none());
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut conversation = Conversation::new();
        conversation.push(Role::User, "first");
        conversation.push(Role::Assistant, "second");
        conversation.push(Role::User, "third");

        let contents: Vec<&str> = conversation
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        assert_eq!(conversation.messages()[1].role, Role::Assistant);
    }

    #[test]
    fn duplicate_messages_are_kept() {
        let mut conversation = Conversation::new();
        conversation.push(Role::User, "same");
        conversation.push(Role::User, "same");
        assert_eq!(conversation.len(), 2);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut conversation = Conversation::new();
        conversation.push(Role::User, "hello");
        conversation.push(Role::Assistant, "hi");
        conversation.clear();
        assert!(conversation.is_empty());

        conversation.push(Role::User, "again");
        assert_eq!(conversation.len(), 1);
    }
}
