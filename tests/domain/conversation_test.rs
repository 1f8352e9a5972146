use docchat::domain::{Conversation, Message, MessageRole};

#[test]
fn given_new_conversation_when_created_then_is_empty() {
    let conversation = Conversation::new();

    assert!(conversation.is_empty());
    assert!(!conversation.has_unanswered_question());
}

#[test]
fn given_pushed_messages_when_reading_then_preserves_insertion_order() {
    let mut conversation = Conversation::new();
    conversation.push(Message::user("first"));
    conversation.push(Message::assistant("second"));
    conversation.push(Message::user("third"));

    let contents: Vec<&str> = conversation.messages().iter().map(|m| m.content()).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}

#[test]
fn given_trailing_user_message_when_checking_then_reports_unanswered_question() {
    let mut conversation = Conversation::new();
    conversation.push(Message::user("q1"));
    conversation.push(Message::assistant("a1"));
    conversation.push(Message::user("q2"));

    assert!(conversation.has_unanswered_question());
    assert_eq!(conversation.len(), 3);
}

#[test]
fn given_identical_messages_when_pushed_then_keeps_both() {
    let mut conversation = Conversation::new();
    conversation.push(Message::user("same"));
    conversation.push(Message::user("same"));

    assert_eq!(conversation.len(), 2);
    assert!(conversation.messages().iter().all(|m| m.role() == MessageRole::User));
}
