use super::tts_backend::TtsBackend;
use crate::domain::tts::{LanguageCode, SynthesisError};
use async_trait::async_trait;

/// macOS `say` variant of the backend capability.
///
/// Declared to keep the backend seam stable across provider choices; the
/// actual synthesis is not wired up yet.
// TODO: shell out to /usr/bin/say (voices: de -> Anna, en -> Samantha).
#[derive(Debug, Default)]
pub struct SayTtsBackend;

impl SayTtsBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TtsBackend for SayTtsBackend {
    async fn synthesize(
        &self,
        _text: &str,
        _language: &LanguageCode,
    ) -> Result<Vec<u8>, SynthesisError> {
        Err(SynthesisError::NotImplemented(
            "the macOS say backend is not implemented yet",
        ))
    }
}
