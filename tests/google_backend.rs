// Tests for the Google backend against a local mock of the synthesize
// endpoint: wire format, status handling, and payload validation.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

use tracksynth::domain::tts::{LanguageCode, SynthesisError};
use tracksynth::infrastructure::backends::{GoogleTtsBackend, TtsBackend};

fn backend_for(server: &MockServer) -> GoogleTtsBackend {
    GoogleTtsBackend::new("test-key")
        .unwrap()
        .with_endpoint(server.url("/v1beta1/text:synthesize"))
}

#[tokio::test]
async fn it_should_post_the_expected_request_and_decode_the_audio() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta1/text:synthesize")
                .query_param("key", "test-key")
                .body_contains("\"audioEncoding\":\"MP3\"")
                .body_contains("\"sampleRateHertz\":44100")
                .body_contains("small-bluetooth-speaker-class-device")
                .body_contains("de-DE-Wavenet-C")
                .body_contains("\"text\":\"Hallo Welt\"");
            then.status(200)
                .json_body(json!({ "audioContent": BASE64.encode(b"mp3 bytes") }));
        })
        .await;

    let audio = backend_for(&server)
        .synthesize("Hallo Welt", &LanguageCode::from("de"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(audio, b"mp3 bytes");
}

#[tokio::test]
async fn it_should_surface_a_non_success_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta1/text:synthesize");
            then.status(403).json_body(json!({ "error": "forbidden" }));
        })
        .await;

    let err = backend_for(&server)
        .synthesize("Hallo", &LanguageCode::from("de"))
        .await
        .unwrap_err();

    match err {
        SynthesisError::Status(status) => assert_eq!(status.as_u16(), 403),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn it_should_reject_a_success_response_without_audio_content() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta1/text:synthesize");
            then.status(200).json_body(json!({ "something": "else" }));
        })
        .await;

    let err = backend_for(&server)
        .synthesize("Hallo", &LanguageCode::from("de"))
        .await
        .unwrap_err();

    match err {
        SynthesisError::MalformedResponse(msg) => assert!(msg.contains("audioContent")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn it_should_reject_audio_content_that_is_not_base64() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta1/text:synthesize");
            then.status(200)
                .json_body(json!({ "audioContent": "!!! not base64 !!!" }));
        })
        .await;

    let err = backend_for(&server)
        .synthesize("Hallo", &LanguageCode::from("de"))
        .await
        .unwrap_err();

    assert!(matches!(err, SynthesisError::MalformedResponse(_)));
}

#[tokio::test]
async fn it_should_fail_an_unmapped_language_without_calling_the_api() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta1/text:synthesize");
            then.status(200).json_body(json!({ "audioContent": "" }));
        })
        .await;

    let err = backend_for(&server)
        .synthesize("Bonjour", &LanguageCode::from("fr"))
        .await
        .unwrap_err();

    match err {
        SynthesisError::UnsupportedLanguage(language) => assert_eq!(language.as_str(), "fr"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(mock.hits_async().await, 0);
}
