pub mod data;
pub mod templates;

pub use data::{
    field, Classification, ExtractedFields, FieldCheck, FieldValidation, OverallIntegrity,
    VerificationReport, CRITICAL_FIELDS,
};
