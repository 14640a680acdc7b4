pub mod error;
pub mod service;

pub use error::BatchError;
pub use service::{BatchService, BatchSummary, ERROR_THRESHOLD};
