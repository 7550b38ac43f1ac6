pub mod classifier;
pub mod confidence;
pub mod report;

pub use classifier::DocumentClassifier;
pub use confidence::ConfidenceEngine;
pub use report::DocumentVerifier;
