use thiserror::Error;

/// Host-boundary faults. The pipeline itself never errors for bad or noisy
/// documents; the worst case is a low-confidence report flagged for review.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
