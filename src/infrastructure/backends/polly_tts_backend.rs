use super::tts_backend::TtsBackend;
use crate::domain::tts::{LanguageCode, SynthesisError};
use async_trait::async_trait;

/// AWS Polly variant of the backend capability.
///
/// Declared to keep the backend seam stable across provider choices; the
/// actual synthesis is not wired up yet.
// TODO: implement with aws-sdk-polly synthesize_speech (voices: de -> Vicki, en -> Joanna).
#[derive(Debug, Default)]
pub struct PollyTtsBackend;

impl PollyTtsBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TtsBackend for PollyTtsBackend {
    async fn synthesize(
        &self,
        _text: &str,
        _language: &LanguageCode,
    ) -> Result<Vec<u8>, SynthesisError> {
        Err(SynthesisError::NotImplemented(
            "the AWS Polly backend is not implemented yet",
        ))
    }
}
