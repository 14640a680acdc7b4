#[derive(Debug, thiserror::Error)]
pub enum TrackListError {
    #[error("line {line}: expected exactly one '|' delimiter in '{content}'")]
    MalformedLine { line: usize, content: String },
}
