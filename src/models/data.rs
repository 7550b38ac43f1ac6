use serde::Serialize;
use std::collections::BTreeMap;

/// Canonical field labels used across extraction, validation and reporting.
/// These match the labels the report exposes to the presentation layer.
pub mod field {
    pub const NAME: &str = "Name";
    pub const DATE: &str = "Date";
    pub const AADHAAR_NUMBER: &str = "Aadhaar Number";
    pub const PAN_NUMBER: &str = "PAN Number";
    pub const ADDRESS: &str = "Address";
    pub const DOCUMENT_NUMBER: &str = "Document Number";
}

/// Fields whose absence or invalidity weighs three times as much as the rest
/// when field confidence is aggregated.
pub const CRITICAL_FIELDS: [&str; 4] = [
    field::NAME,
    field::DATE,
    field::AADHAAR_NUMBER,
    field::DOCUMENT_NUMBER,
];

/// Extracted field values keyed by field label. A key mapped to `None` was
/// looked for and not found; a key absent from the map is never validated.
pub type ExtractedFields = BTreeMap<String, Option<String>>;

/// Validation verdicts keyed by field label; total over the keys of the
/// `ExtractedFields` map it was produced from.
pub type FieldValidation = BTreeMap<String, FieldCheck>;

/// Outcome of validating a single extracted field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCheck {
    pub valid: bool,
    pub reason: String,
}

impl FieldCheck {
    pub fn pass(reason: &str) -> Self {
        FieldCheck {
            valid: true,
            reason: reason.to_string(),
        }
    }

    pub fn fail(reason: &str) -> Self {
        FieldCheck {
            valid: false,
            reason: reason.to_string(),
        }
    }
}

/// Result of matching normalized text against the document template registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub document: String,
    pub category: String,
    /// Integer percentage of matched template keywords, or the fixed
    /// override value when an identifier-based override fires.
    pub score: u32,
}

impl Classification {
    pub fn unknown(score: u32) -> Self {
        Classification {
            document: "Unknown Document".to_string(),
            category: "Other".to_string(),
            score,
        }
    }
}

/// Two-state integrity verdict. Any single suspicious field forces review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallIntegrity {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "REVIEW REQUIRED")]
    ReviewRequired,
}

impl std::fmt::Display for OverallIntegrity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OverallIntegrity::High => write!(f, "HIGH"),
            OverallIntegrity::ReviewRequired => write!(f, "REVIEW REQUIRED"),
        }
    }
}

/// The finished, self-contained verification record for one page.
/// Serialized keys match the labels the presentation layer renders.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    #[serde(rename = "Uploaded File Name")]
    pub file_name: String,
    #[serde(rename = "Document Type")]
    pub document_type: String,
    #[serde(rename = "Document Category")]
    pub document_category: String,
    #[serde(rename = "Template Match Score")]
    pub template_match_score: u32,
    #[serde(rename = "Aadhaar Detected")]
    pub aadhaar_detected: bool,
    #[serde(rename = "Aadhaar Number")]
    pub aadhaar_number: Option<String>,
    #[serde(rename = "PAN Detected")]
    pub pan_detected: bool,
    #[serde(rename = "PAN Number")]
    pub pan_number: Option<String>,
    #[serde(rename = "Extracted Fields")]
    pub extracted_fields: ExtractedFields,
    #[serde(rename = "Field Validation")]
    pub field_validation: FieldValidation,
    #[serde(rename = "Field Confidence")]
    pub field_confidence: f64,
    #[serde(rename = "Suspicious Fields")]
    pub suspicious_fields: Vec<String>,
    #[serde(rename = "Overall Integrity")]
    pub overall_integrity: OverallIntegrity,
    #[serde(rename = "OCR Confidence")]
    pub ocr_confidence: f64,
    #[serde(rename = "Verification Confidence")]
    pub verification_confidence: f64,
}
