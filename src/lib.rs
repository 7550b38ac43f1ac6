pub mod models;
pub mod processing;
pub mod utils;
pub mod validation;
pub mod verification;

pub use verification::DocumentVerifier;
