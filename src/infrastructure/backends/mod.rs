pub mod google_tts_backend;
pub mod polly_tts_backend;
pub mod say_tts_backend;
pub mod tts_backend;

pub use google_tts_backend::GoogleTtsBackend;
pub use polly_tts_backend::PollyTtsBackend;
pub use say_tts_backend::SayTtsBackend;
pub use tts_backend::TtsBackend;
