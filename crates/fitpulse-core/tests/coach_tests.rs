//! Coach and completion client tests against a mock completion server.

use std::sync::Arc;

use fitpulse_core::{
    coach::{Coach, CompletionClient, CompletionConfig, GroqClient},
    models::{ChatMessage, ChatRole},
    params::Day,
    ApplyOutcome, DayType, ScheduleError,
};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

mod common;
use common::create_test_scheduler;

const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "llama-3.1-8b-instant",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

fn client_for(server: &MockServer) -> GroqClient {
    GroqClient::new(
        CompletionConfig::new("test-key")
            .with_endpoint(format!("{}{COMPLETIONS_PATH}", server.uri())),
    )
}

async fn mount_reply(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_client_sends_openai_compatible_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "llama-3.1-8b-instant",
            "max_tokens": 1024
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hi")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .complete(&[ChatMessage::user("Hello")])
        .await
        .expect("Request should succeed");
    assert_eq!(reply, "Hi");
}

#[tokio::test]
async fn test_client_maps_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let result = client_for(&server).complete(&[ChatMessage::user("Hello")]).await;
    match result {
        Err(ScheduleError::Completion { message }) => {
            assert!(message.contains("429"));
            assert!(message.contains("rate limited"));
        }
        other => panic!("Expected completion error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_returns_empty_string_without_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .complete(&[ChatMessage::user("Hello")])
        .await
        .expect("Request should succeed");
    assert_eq!(reply, "");
}

#[tokio::test]
async fn test_ask_records_history() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let server = MockServer::start().await;
    mount_reply(&server, "Drink water.").await;

    let coach = Coach::new(scheduler, Arc::new(client_for(&server)));
    let reply = coach.ask("  Any tips?  ").await.expect("Ask should succeed");
    assert_eq!(reply, "Drink water.");

    let history = coach.history().await.expect("Failed to load history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, ChatRole::User);
    assert_eq!(history[0].content, "Any tips?");
    assert_eq!(history[1].role, ChatRole::Assistant);
    assert_eq!(history[1].content, "Drink water.");

    coach.new_chat().await.expect("Failed to clear history");
    assert!(coach.history().await.expect("Failed to load history").is_empty());
}

#[tokio::test]
async fn test_ask_keeps_question_when_request_fails() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let coach = Coach::new(scheduler, Arc::new(client_for(&server)));
    let result = coach.ask("Hello?").await;
    assert!(matches!(result, Err(ScheduleError::Completion { .. })));

    let history = coach.history().await.expect("Failed to load history");
    assert_eq!(history, vec![ChatMessage::user("Hello?")]);
}

#[tokio::test]
async fn test_build_schedule_applies_reply() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let server = MockServer::start().await;
    mount_reply(
        &server,
        r#"Great, here it is: {"duration":3,"schedule":[5,0,6],"customDays":{"d1":["burpees"]}}"#,
    )
    .await;

    let coach = Coach::new(scheduler.clone(), Arc::new(client_for(&server)));
    let reply = coach
        .build_schedule("Three days, intense")
        .await
        .expect("Build should succeed");
    assert!(reply.outcome.is_applied());

    let program = scheduler.program().await.expect("Failed to load program");
    assert_eq!(program.duration_days, 3);
    assert_eq!(
        program.schedule,
        Some(vec![DayType::Hiit, DayType::Rest, DayType::Strength])
    );
    assert!(program.first_setup_complete);
    assert_eq!(
        scheduler
            .effective_exercises(&Day { day: 1 })
            .await
            .expect("Failed to get exercises"),
        vec!["burpees".to_string()]
    );

    // Schedule building does not touch the saved conversation.
    assert!(coach.history().await.expect("Failed to load history").is_empty());
}

#[tokio::test]
async fn test_build_schedule_question_is_not_applied() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let server = MockServer::start().await;
    mount_reply(&server, "What is your fitness level?").await;

    let coach = Coach::new(scheduler.clone(), Arc::new(client_for(&server)));
    let reply = coach.build_schedule("Hi").await.expect("Build should succeed");

    assert_eq!(reply.reply, "What is your fitness level?");
    assert!(matches!(reply.outcome, ApplyOutcome::Rejected(_)));
    assert_eq!(
        scheduler.program().await.expect("Failed to load program"),
        fitpulse_core::Program::default()
    );
}

#[tokio::test]
async fn test_disabled_coach_is_a_configuration_error() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    scheduler
        .set_coach_enabled(false)
        .await
        .expect("Failed to disable coach");
    let coach = Coach::new(scheduler, Arc::new(client_for(&server)));

    assert!(matches!(
        coach.ask("Hello").await,
        Err(ScheduleError::Configuration { .. })
    ));
    assert!(matches!(
        coach.build_schedule("Hello").await,
        Err(ScheduleError::Configuration { .. })
    ));
    assert!(coach.history().await.expect("Failed to load history").is_empty());
}
