use log::{debug, info};

use crate::models::templates::{context_keyword_count, AADHAAR_CONTEXT_KEYWORDS};
use crate::models::VerificationReport;
use crate::processing::extractors::FieldExtractor;
use crate::processing::identifiers::{extract_aadhaar, extract_pan};
use crate::processing::normalize::normalize;
use crate::validation::fields::FieldValidator;
use crate::verification::classifier::DocumentClassifier;
use crate::verification::confidence::ConfidenceEngine;

pub struct DocumentVerifier;

impl DocumentVerifier {
    pub fn new() -> Self {
        DocumentVerifier
    }

    /// Run the full pipeline over one page of OCR output and return the
    /// finished report. Every stage is a pure function of its inputs, so
    /// pages can be verified concurrently with independent calls; merging
    /// multi-page reports is the caller's concern. `ocr_confidence` is the
    /// external engine's 0-100 trust signal and is never recomputed here.
    pub fn verify(&self, file_name: &str, text: &str, ocr_confidence: f64) -> VerificationReport {
        info!("verifying {}", file_name);

        // Step 1: canonicalize the text for every downstream stage.
        let normalized = normalize(text);

        // Step 2: identifier extraction with checksum validation.
        let aadhaar_number = extract_aadhaar(text, &normalized);
        let pan_number = extract_pan(&normalized);

        // Step 3: template classification plus identifier overrides.
        let classification = DocumentClassifier::classify(
            &normalized,
            aadhaar_number.as_deref(),
            pan_number.as_deref(),
        );
        debug!("classified as {:?}", classification);

        let aadhaar_detected = aadhaar_number.is_some()
            && context_keyword_count(&normalized, &AADHAAR_CONTEXT_KEYWORDS) > 0;
        let pan_detected = pan_number.is_some();

        // Step 4: per-field extraction, trusting the validated identifier.
        let extracted_fields =
            FieldExtractor::extract_fields(text, aadhaar_number.as_deref());

        // Step 5: per-field validation.
        let field_validation = FieldValidator::validate(&extracted_fields);

        // Step 6: confidence aggregation.
        let (field_confidence, suspicious_fields) =
            ConfidenceEngine::field_confidence(&field_validation);
        let overall_integrity = ConfidenceEngine::overall_integrity(&suspicious_fields);
        let verification_confidence = ConfidenceEngine::verification_confidence(
            ocr_confidence,
            field_confidence,
            classification.score,
            aadhaar_number.is_some(),
            &classification.category,
            &suspicious_fields,
        );

        VerificationReport {
            file_name: file_name.to_string(),
            document_type: classification.document,
            document_category: classification.category,
            template_match_score: classification.score,
            aadhaar_detected,
            aadhaar_number,
            pan_detected,
            pan_number,
            extracted_fields,
            field_validation,
            field_confidence,
            suspicious_fields,
            overall_integrity,
            ocr_confidence,
            verification_confidence,
        }
    }
}

impl Default for DocumentVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{field, OverallIntegrity};

    // Aadhaar-style page with a checksum-valid number (234112345677).
    const AADHAAR_PAGE: &str = "GOVERNMENT OF INDIA UNIQUE IDENTIFICATION AUTHORITY \
         OF INDIA NAME RAVI KUMAR DOB 03/04/1981 AADHAAR 2341 1234 5677";

    #[test]
    fn test_aadhaar_page_verifies_high() {
        let report = DocumentVerifier::new().verify("aadhaar.png", AADHAAR_PAGE, 88.0);

        assert_eq!(report.document_type, "Aadhaar Card");
        assert!(report.aadhaar_detected);
        assert_eq!(report.aadhaar_number, Some("234112345677".to_string()));
        assert!(report.extracted_fields[field::NAME].is_some());
        assert_eq!(
            report.extracted_fields[field::DATE],
            Some("03/04/1981".to_string())
        );
        assert!(report.suspicious_fields.is_empty());
        assert_eq!(report.overall_integrity, OverallIntegrity::High);
        assert_eq!(report.field_confidence, 100.0);
    }

    #[test]
    fn test_pan_page() {
        let text = "INCOME TAX DEPARTMENT PERMANENT ACCOUNT NUMBER ABCDE1234F";
        let report = DocumentVerifier::new().verify("pan.jpg", text, 80.0);

        assert_eq!(report.document_type, "PAN Card");
        assert!(report.pan_detected);
        assert_eq!(report.pan_number, Some("ABCDE1234F".to_string()));
        assert_eq!(
            report.extracted_fields[field::PAN_NUMBER],
            Some("ABCDE1234F".to_string())
        );
        assert!(report.field_validation[field::PAN_NUMBER].valid);
    }

    #[test]
    fn test_empty_page_degrades_gracefully() {
        let report = DocumentVerifier::new().verify("blank.png", "", 0.0);

        assert_eq!(report.document_type, "Unknown Document");
        assert!(!report.aadhaar_detected);
        assert!(!report.pan_detected);
        assert_eq!(report.extracted_fields[field::NAME], None);
        assert_eq!(report.extracted_fields[field::DATE], None);
        assert_eq!(report.field_confidence, 0.0);
        assert_eq!(report.verification_confidence, 0.0);
        assert_eq!(report.overall_integrity, OverallIntegrity::ReviewRequired);
    }

    #[test]
    fn test_leading_one_number_is_never_a_candidate() {
        let payload = "13411234567";
        let check = crate::validation::verhoeff::verhoeff_digit(payload).unwrap();
        let text = format!(
            "UNIQUE IDENTIFICATION AUTHORITY AADHAAR UIDAI {}{}",
            payload, check
        );
        let report = DocumentVerifier::new().verify("odd.png", &text, 75.0);

        assert!(!report.aadhaar_detected);
        assert_eq!(report.aadhaar_number, None);
    }

    #[test]
    fn test_adding_valid_identifier_never_lowers_confidence() {
        let base = "GOVERNMENT OF INDIA UNIQUE IDENTIFICATION AUTHORITY \
             NAME RAVI KUMAR DOB 03/04/1981 AADHAAR UIDAI";
        let with_id = format!("{} 2341 1234 5677", base);

        let verifier = DocumentVerifier::new();
        let without = verifier.verify("a.png", base, 70.0);
        let with = verifier.verify("a.png", &with_id, 70.0);
        assert!(with.verification_confidence >= without.verification_confidence);
    }

    #[test]
    fn test_confidence_bounds_hold_on_arbitrary_inputs() {
        let verifier = DocumentVerifier::new();
        for text in [
            "",
            "    ",
            "9999 9999 9999",
            "AADHAAR UIDAI 2341 1234 5677 ABCDE1234F VTC 03/04/1981 RAVI KUMAR",
            "\u{00e9}\u{00fc} unicode noise \u{0915}\u{0916}",
        ] {
            for conf in [0.0, 29.9, 50.0, 100.0] {
                let report = verifier.verify("x", text, conf);
                assert!(report.field_confidence >= 0.0 && report.field_confidence <= 100.0);
                assert!(
                    report.verification_confidence >= 0.0
                        && report.verification_confidence <= 95.0
                );
            }
        }
    }

    #[test]
    fn test_report_serializes_with_presentation_labels() {
        let report = DocumentVerifier::new().verify("doc.pdf", AADHAAR_PAGE, 90.0);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["Uploaded File Name"], "doc.pdf");
        assert_eq!(json["Document Type"], "Aadhaar Card");
        assert_eq!(json["Overall Integrity"], "HIGH");
        assert!(json["Extracted Fields"].is_object());
        assert!(json["Field Validation"][field::NAME]["valid"].as_bool().unwrap());
        assert!(json["Suspicious Fields"].is_array());
    }
}
