pub mod batch;
pub mod track;
pub mod tts;
