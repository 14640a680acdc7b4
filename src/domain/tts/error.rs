use super::language::LanguageCode;

/// Why a single synthesis attempt failed.
///
/// All variants are recoverable at the batch level: the orchestrator counts
/// them against the abort threshold instead of stopping on the first one.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("no voice configured for language '{0}'")]
    UnsupportedLanguage(LanguageCode),

    #[error("synthesis request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    NotImplemented(&'static str),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
