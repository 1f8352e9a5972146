use std::sync::Arc;

use docchat::application::ports::{LlmClientError, SessionRepository};
use docchat::application::services::ConversationError;
use docchat::domain::{Document, MessageRole, SessionId};

use crate::support::{
    ScriptedLlmClient, TEST_REPLY, conversation_service, seeded_session, session_repository,
};

#[tokio::test]
async fn given_no_document_when_asking_then_sends_question_verbatim() {
    let repository = session_repository();
    let session_id = seeded_session(&repository).await;
    let llm = Arc::new(ScriptedLlmClient::new());
    let service = conversation_service(Arc::clone(&llm), &repository);

    let answer = service.ask(session_id, "Hello, AI!").await.unwrap();

    assert_eq!(answer.role(), MessageRole::Assistant);
    assert_eq!(answer.content(), TEST_REPLY);
    assert_eq!(llm.prompts(), vec!["Hello, AI!".to_string()]);
}

#[tokio::test]
async fn given_loaded_document_when_asking_then_prompt_embeds_context() {
    let repository = session_repository();
    let session_id = seeded_session(&repository).await;
    repository
        .set_document(
            session_id,
            Some(Document::new(
                "hello.pdf".to_string(),
                100,
                "Hello, World!".to_string(),
            )),
        )
        .await
        .unwrap();
    let llm = Arc::new(ScriptedLlmClient::new());
    let service = conversation_service(Arc::clone(&llm), &repository);

    service.ask(session_id, "What does it say?").await.unwrap();

    assert_eq!(
        llm.prompts(),
        vec!["Context from PDF:\nHello, World!\n\nQuestion: What does it say?".to_string()]
    );
}

#[tokio::test]
async fn given_n_answered_questions_when_reading_history_then_alternates_starting_with_user() {
    let repository = session_repository();
    let session_id = seeded_session(&repository).await;
    let llm = Arc::new(ScriptedLlmClient::with_script(vec![
        Some("a1"),
        Some("a2"),
        Some("a3"),
    ]));
    let service = conversation_service(Arc::clone(&llm), &repository);

    for question in ["q1", "q2", "q3"] {
        service.ask(session_id, question).await.unwrap();
    }

    let history = service.history(session_id).await.unwrap();
    assert_eq!(history.len(), 6);
    for (index, message) in history.iter().enumerate() {
        let expected = if index % 2 == 0 {
            MessageRole::User
        } else {
            MessageRole::Assistant
        };
        assert_eq!(message.role(), expected);
    }
    let contents: Vec<&str> = history.iter().map(|m| m.content()).collect();
    assert_eq!(contents, vec!["q1", "a1", "q2", "a2", "q3", "a3"]);
}

#[tokio::test]
async fn given_generation_failure_when_asking_then_keeps_unanswered_user_turn() {
    let repository = session_repository();
    let session_id = seeded_session(&repository).await;
    let llm = Arc::new(ScriptedLlmClient::failing());
    let service = conversation_service(Arc::clone(&llm), &repository);

    let result = service.ask(session_id, "Will this fail?").await;

    assert!(matches!(
        result,
        Err(ConversationError::Generation(LlmClientError::ApiRequestFailed(_)))
    ));
    let history = service.history(session_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].role(), MessageRole::User);
    assert_eq!(history[0].content(), "Will this fail?");
    assert_eq!(llm.prompts().len(), 1);
}

#[tokio::test]
async fn given_failure_then_success_when_asking_then_history_has_three_messages() {
    let repository = session_repository();
    let session_id = seeded_session(&repository).await;
    let llm = Arc::new(ScriptedLlmClient::with_script(vec![None, Some("recovered")]));
    let service = conversation_service(Arc::clone(&llm), &repository);

    assert!(service.ask(session_id, "first").await.is_err());
    service.ask(session_id, "second").await.unwrap();

    let roles: Vec<MessageRole> = service
        .history(session_id)
        .await
        .unwrap()
        .iter()
        .map(|m| m.role())
        .collect();
    assert_eq!(
        roles,
        vec![MessageRole::User, MessageRole::User, MessageRole::Assistant]
    );
}

#[tokio::test]
async fn given_blank_question_when_asking_then_rejects_without_calling_model() {
    let repository = session_repository();
    let session_id = seeded_session(&repository).await;
    let llm = Arc::new(ScriptedLlmClient::new());
    let service = conversation_service(Arc::clone(&llm), &repository);

    let result = service.ask(session_id, "   ").await;

    assert!(matches!(result, Err(ConversationError::EmptyQuestion)));
    assert!(llm.prompts().is_empty());
    assert!(service.history(session_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn given_unknown_session_when_asking_then_returns_session_not_found() {
    let repository = session_repository();
    let llm = Arc::new(ScriptedLlmClient::new());
    let service = conversation_service(Arc::clone(&llm), &repository);

    let result = service.ask(SessionId::new(), "Hi").await;

    assert!(matches!(result, Err(ConversationError::SessionNotFound(_))));
    assert!(llm.prompts().is_empty());
}

#[tokio::test]
async fn given_two_sessions_when_asking_then_histories_stay_isolated() {
    let repository = session_repository();
    let first = seeded_session(&repository).await;
    let second = seeded_session(&repository).await;
    let llm = Arc::new(ScriptedLlmClient::new());
    let service = conversation_service(Arc::clone(&llm), &repository);

    service.ask(first, "only in first").await.unwrap();

    assert_eq!(service.history(first).await.unwrap().len(), 2);
    assert!(service.history(second).await.unwrap().is_empty());
}

#[tokio::test]
async fn given_concurrent_questions_in_one_session_when_asking_then_turns_do_not_interleave() {
    let repository = session_repository();
    let session_id = seeded_session(&repository).await;
    let llm = Arc::new(ScriptedLlmClient::new());
    let service = Arc::new(conversation_service(Arc::clone(&llm), &repository));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.ask(session_id, &format!("q{i}")).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let history = service.history(session_id).await.unwrap();
    assert_eq!(history.len(), 16);
    for pair in history.chunks(2) {
        assert_eq!(pair[0].role(), MessageRole::User);
        assert_eq!(pair[1].role(), MessageRole::Assistant);
    }
}
