mod common;

use common::{EchoBackend, SilentBackend, UnauthorizedBackend};
use expert_chat::{
    Persona,
    error::GatewayError,
    gateway::{CompletionGateway, MODEL, TEMPERATURE},
};
use expert_core::generic::GenericRole;

#[tokio::test]
async fn sends_system_then_user_message_verbatim() {
    let gateway = CompletionGateway::new(EchoBackend::default());

    let reply = gateway
        .complete_by_identifier("IT専門家", "What is a pointer?")
        .await
        .unwrap();

    let calls = gateway.backend().calls();
    assert_eq!(calls.len(), 1);

    let messages = &calls[0].messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, GenericRole::System);
    assert_eq!(messages[0].text(), Persona::It.system_prompt());
    assert_eq!(messages[1].role, GenericRole::User);
    assert_eq!(messages[1].text(), "What is a pointer?");

    assert_eq!(reply, EchoBackend::echo(messages));
}

#[tokio::test]
async fn uses_fixed_model_and_zero_temperature() {
    let gateway = CompletionGateway::new(EchoBackend::default());

    gateway.complete(Persona::Medical, "頭痛が続きます").await.unwrap();

    let call = &gateway.backend().calls()[0];
    assert_eq!(call.model, MODEL);
    assert_eq!(call.temperature, Some(TEMPERATURE));
    assert_eq!(call.temperature, Some(0.0));
}

#[tokio::test]
async fn unknown_persona_fails_before_sending() {
    let gateway = CompletionGateway::new(EchoBackend::default());

    let err = gateway
        .complete_by_identifier("占い師", "What is a pointer?")
        .await
        .unwrap_err();

    assert_eq!(err, GatewayError::UnknownPersona("占い師".into()));
    assert!(gateway.backend().calls().is_empty());
}

#[tokio::test]
async fn authentication_failure_becomes_completion_failed() {
    let gateway = CompletionGateway::new(UnauthorizedBackend);

    let err = gateway
        .complete(Persona::Legal, "契約の解除について")
        .await
        .unwrap_err();

    match err {
        GatewayError::CompletionFailed(message) => {
            assert!(!message.is_empty());
            assert!(message.contains("401"), "{message}");
        }
        other => panic!("expected CompletionFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn reply_without_text_is_a_failure() {
    let gateway = CompletionGateway::new(SilentBackend);

    let err = gateway.complete(Persona::Culinary, "出汁の取り方").await.unwrap_err();

    assert!(matches!(err, GatewayError::CompletionFailed(ref m) if !m.is_empty()));
}

#[tokio::test]
async fn sequential_calls_do_not_share_state() {
    let gateway = CompletionGateway::new(EchoBackend::default());

    gateway.complete(Persona::Medical, "first").await.unwrap();
    let second = gateway.complete(Persona::Culinary, "second").await.unwrap();

    let calls = gateway.backend().calls();
    assert_eq!(calls.len(), 2);

    let second_messages = &calls[1].messages;
    assert_eq!(second_messages.len(), 2);
    assert_eq!(second_messages[0].text(), Persona::Culinary.system_prompt());
    assert_eq!(second_messages[1].text(), "second");
    assert!(!second.contains(Persona::Medical.system_prompt()));
    assert!(!second.contains("first"));
}

#[tokio::test]
async fn blank_text_is_forwarded_without_panicking() {
    let gateway = CompletionGateway::new(EchoBackend::default());

    let reply = gateway.complete(Persona::It, "   ").await;

    assert!(reply.is_ok());
    assert_eq!(gateway.backend().calls()[0].messages[1].text(), "   ");
}
