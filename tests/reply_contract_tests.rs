use practice_backend::message::ReplyRequest;
use practice_backend::services::reply::{NOT_CONFIGURED_REPLY, ReplyError, ReplyService};
use practice_backend::services::testing::StubGenerator;
use practice_backend::services::tone::Tone;

use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_unknown_tone_behaves_like_professional() {
    let stub = Arc::new(StubGenerator::echo());
    let service = ReplyService::new(stub.clone(), 500);

    let sarcastic = service
        .generate_reply(ReplyRequest::new("Hello", Some("sarcastic")))
        .await
        .unwrap();
    let professional = service
        .generate_reply(ReplyRequest::new("Hello", Some("professional")))
        .await
        .unwrap();
    let absent = service
        .generate_reply(ReplyRequest::new("Hello", None))
        .await
        .unwrap();
    let capitalised = service
        .generate_reply(ReplyRequest::new("Hello", Some("Empathetic")))
        .await
        .unwrap();
    let numeric = service
        .generate_reply(ReplyRequest { message: Some("Hello".into()), tone: Some(json!(3)) })
        .await
        .unwrap();

    assert_eq!(sarcastic.reply, professional.reply);
    assert_eq!(absent.reply, professional.reply);
    assert_eq!(capitalised.reply, professional.reply);
    assert_eq!(numeric.reply, professional.reply);

    let systems: Vec<_> = stub.recorded().into_iter().map(|c| c.system).collect();
    assert!(systems.iter().all(|s| s == Tone::Professional.system_prompt()));
}

#[tokio::test]
async fn test_reply_is_verbatim_and_timestamped_now() {
    let text = "  Take a breath.\nWe can talk on Thursday.  ";
    let service = ReplyService::new(Arc::new(StubGenerator::fixed(text)), 500);

    let before = Utc::now();
    let response = service
        .generate_reply(ReplyRequest::new("I'm overwhelmed", Some("empathetic")))
        .await
        .unwrap();
    let after = Utc::now();

    assert_eq!(response.reply, text);
    let stamped: DateTime<Utc> = DateTime::parse_from_rfc3339(&response.timestamp)
        .unwrap()
        .with_timezone(&Utc);
    // Millisecond precision can round the stamp just below `before`.
    assert!(stamped >= before - chrono::Duration::milliseconds(1));
    assert!(stamped <= after);
}

#[tokio::test]
async fn test_error_masking_is_stable() {
    let service = ReplyService::new(Arc::new(StubGenerator::failing()), 500);

    for _ in 0..3 {
        let err = service
            .generate_reply(ReplyRequest::new("Hello", Some("supportive")))
            .await
            .unwrap_err();
        assert!(matches!(err, ReplyError::Generation(_)));
    }
}

#[tokio::test]
async fn test_unconfigured_path_never_errors() {
    let stub = Arc::new(StubGenerator::unconfigured());
    let service = ReplyService::new(stub.clone(), 500);

    for tone in ["professional", "empathetic", "supportive", "shouty"] {
        let response = service
            .generate_reply(ReplyRequest::new("Hello", Some(tone)))
            .await
            .unwrap();
        assert_eq!(response.reply, NOT_CONFIGURED_REPLY);
    }
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_concurrent_tones_do_not_leak() {
    let stub = Arc::new(StubGenerator::echo().with_delay(Duration::from_millis(20)));
    let service = ReplyService::new(stub.clone(), 500);

    let professional = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .generate_reply(ReplyRequest::new("first", Some("professional")))
                .await
        })
    };
    let empathetic = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .generate_reply(ReplyRequest::new("second", Some("empathetic")))
                .await
        })
    };

    let (professional, empathetic) = tokio::join!(professional, empathetic);
    let professional = professional.unwrap().unwrap();
    let empathetic = empathetic.unwrap().unwrap();

    assert_eq!(professional.reply, Tone::Professional.system_prompt());
    assert_eq!(empathetic.reply, Tone::Empathetic.system_prompt());
    assert_eq!(stub.calls(), 2);
}
