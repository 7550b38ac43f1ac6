use log::debug;

use crate::models::templates::{
    context_keyword_count, AADHAAR_CONTEXT_KEYWORDS, DOCUMENT_TEMPLATES, PAN_CONTEXT_KEYWORDS,
};
use crate::models::Classification;

/// Score forced by an identifier-based override.
const OVERRIDE_SCORE: u32 = 85;
/// Best keyword scores below this are demoted to Unknown Document.
const MIN_MATCH_SCORE: u32 = 30;

pub struct DocumentClassifier;

impl DocumentClassifier {
    /// Score normalized text against the fixed template registry, then apply
    /// the identifier overrides. `aadhaar` must already be checksum-validated
    /// and `pan` pattern-matched by the identifier extractor; the classifier
    /// trusts both.
    pub fn classify(
        normalized: &str,
        aadhaar: Option<&str>,
        pan: Option<&str>,
    ) -> Classification {
        let squeezed = normalized.replace(' ', "");

        // Strict > keeps the first-registered template on ties; registry
        // order is the documented priority list.
        let mut best = Classification::unknown(0);
        let mut best_score: u32 = 0;
        for template in DOCUMENT_TEMPLATES.iter() {
            let matched = template
                .keywords
                .iter()
                .filter(|kw| squeezed.contains(&kw.replace(' ', "")))
                .count();
            let score = (matched * 100 / template.keywords.len()) as u32;
            if score > best_score {
                best_score = score;
                best = Classification {
                    document: template.document.to_string(),
                    category: template.category.to_string(),
                    score,
                };
            }
        }

        // Identifier overrides. When both fire, PAN wins.
        let mut overridden = None;
        if aadhaar.is_some()
            && context_keyword_count(normalized, &AADHAAR_CONTEXT_KEYWORDS) >= 2
        {
            overridden = Some(Classification {
                document: "Aadhaar Card".to_string(),
                category: "Government ID".to_string(),
                score: best_score.max(OVERRIDE_SCORE),
            });
        }
        if pan.is_some() && context_keyword_count(normalized, &PAN_CONTEXT_KEYWORDS) >= 2 {
            overridden = Some(Classification {
                document: "PAN Card".to_string(),
                category: "Government ID".to_string(),
                score: best_score.max(OVERRIDE_SCORE),
            });
        }
        if let Some(classification) = overridden {
            debug!("identifier override fired: {:?}", classification);
            return classification;
        }

        // A weak best match is demoted rather than reported as a false
        // positive.
        if best_score < MIN_MATCH_SCORE {
            return Classification::unknown(best_score);
        }
        best
    }
}
