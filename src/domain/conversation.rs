use super::{Message, MessageRole};

/// Ordered, append-only chat history. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True when the latest turn is a user message with no reply after it.
    pub fn has_unanswered_question(&self) -> bool {
        self.messages
            .last()
            .is_some_and(|m| m.role() == MessageRole::User)
    }
}
