use log::debug;

use crate::models::templates::GOVERNMENT_ID_CATEGORIES;
use crate::models::{FieldValidation, OverallIntegrity, CRITICAL_FIELDS};

/// Verification confidence never reports certainty; 95 is a hard ceiling.
const CONFIDENCE_CEILING: f64 = 95.0;

const CRITICAL_WEIGHT: u32 = 3;
const OPTIONAL_WEIGHT: u32 = 1;

pub struct ConfidenceEngine;

impl ConfidenceEngine {
    /// Fold per-field validity into a weighted 0-100 score plus the list of
    /// suspicious fields. The list doubles as the trigger for the overall
    /// integrity verdict.
    pub fn field_confidence(validation: &FieldValidation) -> (f64, Vec<String>) {
        let mut earned: u32 = 0;
        let mut total: u32 = 0;
        let mut suspicious = Vec::new();

        for (name, check) in validation {
            let weight = if CRITICAL_FIELDS.contains(&name.as_str()) {
                CRITICAL_WEIGHT
            } else {
                OPTIONAL_WEIGHT
            };
            total += weight;
            if check.valid {
                earned += weight;
            } else {
                suspicious.push(format!("{}: {}", name, check.reason));
            }
        }

        if total == 0 {
            return (0.0, suspicious);
        }
        let score = (earned as f64 / total as f64 * 100.0 * 100.0).round() / 100.0;
        (score, suspicious)
    }

    /// Blend OCR confidence with field confidence and the bonus/penalty
    /// signals into a single clamped score.
    pub fn verification_confidence(
        ocr_confidence: f64,
        field_confidence: f64,
        classification_score: u32,
        identifier_present: bool,
        category: &str,
        suspicious: &[String],
    ) -> f64 {
        let mut score = 0.4 * ocr_confidence + 0.6 * field_confidence;

        if identifier_present {
            score += 6.0;
        }
        if GOVERNMENT_ID_CATEGORIES.contains(&category) {
            score += 4.0;
        }
        if suspicious.is_empty() {
            score += 5.0;
        }
        if classification_score > 70 {
            score += 3.0;
        }
        if ocr_confidence < 30.0 {
            score -= 4.0;
        }

        let clamped = score.clamp(0.0, CONFIDENCE_CEILING);
        let rounded = (clamped * 100.0).round() / 100.0;
        debug!(
            "verification confidence {} (ocr {}, fields {})",
            rounded, ocr_confidence, field_confidence
        );
        rounded
    }

    /// Two-state verdict: any suspicious field forces review.
    pub fn overall_integrity(suspicious: &[String]) -> OverallIntegrity {
        if suspicious.is_empty() {
            OverallIntegrity::High
        } else {
            OverallIntegrity::ReviewRequired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{field, FieldCheck};

    fn validation(entries: &[(&str, bool)]) -> FieldValidation {
        entries
            .iter()
            .map(|(name, valid)| {
                let check = if *valid {
                    FieldCheck::pass("ok")
                } else {
                    FieldCheck::fail("bad")
                };
                (name.to_string(), check)
            })
            .collect()
    }

    #[test]
    fn test_critical_fields_weigh_triple() {
        // Valid Name (3) against invalid Address (1): 3 of 4 -> 75.
        let v = validation(&[(field::NAME, true), (field::ADDRESS, false)]);
        let (score, suspicious) = ConfidenceEngine::field_confidence(&v);
        assert_eq!(score, 75.0);
        assert_eq!(suspicious, vec!["Address: bad".to_string()]);
    }

    #[test]
    fn test_empty_validation_scores_zero() {
        let (score, suspicious) = ConfidenceEngine::field_confidence(&FieldValidation::new());
        assert_eq!(score, 0.0);
        assert!(suspicious.is_empty());
    }

    #[test]
    fn test_all_valid_scores_hundred() {
        let v = validation(&[
            (field::NAME, true),
            (field::DATE, true),
            (field::AADHAAR_NUMBER, true),
        ]);
        let (score, suspicious) = ConfidenceEngine::field_confidence(&v);
        assert_eq!(score, 100.0);
        assert!(suspicious.is_empty());
        assert_eq!(
            ConfidenceEngine::overall_integrity(&suspicious),
            OverallIntegrity::High
        );
    }

    #[test]
    fn test_bonuses_and_ceiling() {
        // Everything maxed still caps at 95.
        let score = ConfidenceEngine::verification_confidence(
            100.0,
            100.0,
            100,
            true,
            "Government ID",
            &[],
        );
        assert_eq!(score, 95.0);
    }

    #[test]
    fn test_low_ocr_penalty_cannot_go_negative() {
        let suspicious = vec!["Name: bad".to_string()];
        let score =
            ConfidenceEngine::verification_confidence(0.0, 0.0, 0, false, "Other", &suspicious);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_identifier_bonus_is_monotonic() {
        let suspicious = vec!["Address: bad".to_string()];
        let without =
            ConfidenceEngine::verification_confidence(50.0, 60.0, 40, false, "Other", &suspicious);
        let with =
            ConfidenceEngine::verification_confidence(50.0, 60.0, 40, true, "Other", &suspicious);
        assert!(with >= without);
        assert_eq!(with - without, 6.0);
    }

    #[test]
    fn test_suspicious_forces_review() {
        let suspicious = vec!["Date: Invalid date format".to_string()];
        assert_eq!(
            ConfidenceEngine::overall_integrity(&suspicious),
            OverallIntegrity::ReviewRequired
        );
    }
}
