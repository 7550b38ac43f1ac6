pub mod extractors;
pub mod identifiers;
pub mod normalize;

pub use extractors::FieldExtractor;
pub use normalize::normalize;
