use super::error::BatchError;
use crate::domain::track::TrackEntry;
use crate::domain::tts::LanguageCode;
use crate::infrastructure::backends::TtsBackend;
use crate::infrastructure::output::TrackWriter;
use std::sync::Arc;

/// Number of recoverable failures after which a batch aborts.
pub const ERROR_THRESHOLD: u32 = 3;

/// Outcome of a batch that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub written: usize,
    pub failed: u32,
}

/// Converts an ordered list of track entries into audio files, one backend
/// call and one file per entry, strictly sequentially and in input order.
pub struct BatchService {
    backend: Arc<dyn TtsBackend>,
    writer: TrackWriter,
    language: LanguageCode,
    threshold: u32,
}

impl BatchService {
    pub fn new(backend: Arc<dyn TtsBackend>, writer: TrackWriter, language: LanguageCode) -> Self {
        Self {
            backend,
            writer,
            language,
            threshold: ERROR_THRESHOLD,
        }
    }

    /// Run the batch over all entries.
    ///
    /// Failed synthesis and failed writes both count against the threshold;
    /// neither stops the batch by itself, and already written files are never
    /// rolled back. Once the error count reaches the threshold the batch
    /// aborts before attempting another entry.
    ///
    /// # Errors
    /// Returns [`BatchError::TooManyFailures`] when the threshold is reached.
    /// A run that accumulated failures without ever reaching it still ends in
    /// an `Ok` summary.
    pub async fn run(&self, entries: &[TrackEntry]) -> Result<BatchSummary, BatchError> {
        let total = entries.len();
        let mut errors: u32 = 0;
        let mut written: usize = 0;

        let mut pending = entries.iter().enumerate();
        loop {
            if errors >= self.threshold {
                tracing::error!(failures = errors, "Too many errors, aborting batch");
                return Err(BatchError::TooManyFailures { failures: errors });
            }

            let Some((index, entry)) = pending.next() else {
                break;
            };

            tracing::info!(
                index = index + 1,
                total,
                file = %entry.file_name,
                text = %entry.text,
                "Converting track"
            );

            let audio = match self.backend.synthesize(&entry.text, &self.language).await {
                Ok(audio) => audio,
                Err(e) => {
                    tracing::error!(text = %entry.text, error = %e, "Failed to synthesize track");
                    errors += 1;
                    continue;
                }
            };

            match self.writer.write(&entry.file_name, &audio) {
                Ok(path) => {
                    tracing::debug!(
                        path = %path.display(),
                        audio_size = audio.len(),
                        "Track written"
                    );
                    written += 1;
                }
                Err(e) => {
                    tracing::error!(file = %entry.file_name, error = %e, "Failed to write track");
                    errors += 1;
                }
            }
        }

        Ok(BatchSummary {
            total,
            written,
            failed: errors,
        })
    }
}
