mod common;

use common::{EchoBackend, UnauthorizedBackend};
use expert_chat::{
    Persona,
    config::AppConfig,
    render,
    submission::{CREDENTIAL_HINT, Submission, SubmissionOutcome, handle_submission},
};
use expert_core::error::Result;

#[tokio::test]
async fn blank_input_never_reaches_the_backend() {
    let submission = Submission::new(Persona::It, " \n ");

    let outcome = handle_submission(&submission, || -> Result<EchoBackend> {
        panic!("backend must not be built for blank input")
    })
    .await;

    assert_eq!(outcome, SubmissionOutcome::EmptyInput);
}

#[tokio::test]
async fn answer_carries_persona_and_reply() {
    let submission = Submission::new(Persona::Culinary, "卵焼きのコツは？");

    let outcome = handle_submission(&submission, || Ok(EchoBackend::default())).await;

    let SubmissionOutcome::Answered { persona, reply } = outcome else {
        panic!("expected an answer, got {outcome:?}");
    };
    assert_eq!(persona, Persona::Culinary);
    assert!(reply.ends_with("user: 卵焼きのコツは？"));
}

#[tokio::test]
async fn missing_credential_is_reported_at_submission_time() {
    let config = AppConfig::default();
    let submission = Submission::new(Persona::Medical, "風邪の予防法は？");

    let outcome = handle_submission(&submission, || config.connect()).await;

    let SubmissionOutcome::Failed { persona, message } = &outcome else {
        panic!("expected a failure, got {outcome:?}");
    };
    assert_eq!(*persona, Persona::Medical);
    assert!(message.contains("OPENAI_API_KEY"), "{message}");
    assert_eq!(outcome.hint(), Some(CREDENTIAL_HINT));
}

#[tokio::test]
async fn rejected_request_renders_error_and_hint() {
    let submission = Submission::new(Persona::Legal, "著作権について");

    let outcome = handle_submission(&submission, || Ok(UnauthorizedBackend)).await;
    let text = render::outcome(&outcome);

    assert!(text.starts_with("**エラーが発生しました**: "));
    assert!(text.contains("401 Unauthorized"));
    assert!(text.ends_with(&format!("{CREDENTIAL_HINT}\n")));
}
