#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("too many errors ({failures}), batch aborted")]
    TooManyFailures { failures: u32 },
}
