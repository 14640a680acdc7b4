use crate::domain::tts::{LanguageCode, SynthesisError};
use async_trait::async_trait;

/// Capability for text-to-speech synthesis.
/// Abstracts the underlying provider (Google Cloud TTS, AWS Polly, macOS say, ...)
///
/// Implementations are responsible for:
/// - Resolving the language code to a concrete provider voice
/// - Provider-specific request encoding and response decoding
/// - Owning whatever client/session resource the provider needs for the
///   lifetime of a run
#[async_trait]
pub trait TtsBackend: Send + Sync {
    /// Synthesize spoken text for a given language.
    ///
    /// Returns the raw MP3 bytes, ready to be written to disk unchanged.
    ///
    /// # Errors
    /// Returns a [`SynthesisError`] when the remote call cannot be completed,
    /// the provider answers with a non-success status, the payload is
    /// unusable, or the language has no configured voice.
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<u8>, SynthesisError>;
}
