use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::templates::{ADDRESS_KEYWORDS, NAME_DENYLIST};
use crate::models::{field, ExtractedFields};

lazy_static! {
    // Date pattern families in priority order; a later pattern is only
    // consulted when every earlier one failed.
    static ref DATE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\b\d{2}[/\-]\d{2}[/\-]\d{4}\b").unwrap(),
        Regex::new(r"\b\d{2}\.\d{2}\.\d{4}\b").unwrap(),
        Regex::new(r"\b\d{1,2} [A-Z]{3,9} \d{4}\b").unwrap(),
        // Labeled variants keep the label; the validator strips it.
        Regex::new(r"\b(?:DOB|DATE)[:\s]*\d{2}[/\-]\d{2}[/\-]\d{4}\b").unwrap(),
        // Compact 8-digit block, e.g. 03041981.
        Regex::new(r"\b\d{8}\b").unwrap(),
    ];
    static ref AADHAAR_LOCAL: Regex =
        Regex::new(r"\b[2-9]\d{3}\s?\d{4}\s?\d{4}\b").unwrap();
    static ref PAN_LOCAL: Regex = Regex::new(r"\b[A-Z]{5}[0-9]{4}[A-Z]\b").unwrap();
}

pub struct FieldExtractor;

impl FieldExtractor {
    /// Pull per-field values out of raw OCR text. Uppercasing and whitespace
    /// collapsing happen here; punctuation is kept so slashed dates and PAN
    /// codes survive. Name and Date are always recorded, absent or not;
    /// identifier and address entries appear only when something was found.
    /// A `known_aadhaar` already validated upstream is trusted verbatim.
    /// Extraction never fails; absence is `None`, not an error.
    pub fn extract_fields(text: &str, known_aadhaar: Option<&str>) -> ExtractedFields {
        let cleaned = Self::clean(text);
        let mut fields = ExtractedFields::new();

        fields.insert(field::NAME.to_string(), Self::extract_name(&cleaned));
        fields.insert(field::DATE.to_string(), Self::extract_date(&cleaned));

        let aadhaar = match known_aadhaar {
            Some(n) => Some(n.to_string()),
            None => AADHAAR_LOCAL
                .find(&cleaned)
                .map(|m| m.as_str().replace(' ', "")),
        };
        if let Some(number) = aadhaar {
            fields.insert(field::AADHAAR_NUMBER.to_string(), Some(number));
        }

        if let Some(m) = PAN_LOCAL.find(&cleaned) {
            fields.insert(field::PAN_NUMBER.to_string(), Some(m.as_str().to_string()));
        }

        if Self::has_address_marker(&cleaned) {
            fields.insert(field::ADDRESS.to_string(), Some("Present".to_string()));
        }

        debug!("extracted fields: {:?}", fields);
        fields
    }

    fn clean(text: &str) -> String {
        text.to_uppercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First run of consecutive alphabetic words containing no denylisted
    /// institutional word, with a joined length of at least 4.
    fn extract_name(cleaned: &str) -> Option<String> {
        let mut run: Vec<&str> = Vec::new();
        for token in cleaned.split(' ') {
            let alphabetic =
                !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic());
            if alphabetic && !NAME_DENYLIST.contains(&token) {
                run.push(token);
                continue;
            }
            if run.join(" ").len() >= 4 {
                return Some(run.join(" "));
            }
            run.clear();
        }
        let joined = run.join(" ");
        if joined.len() >= 4 {
            Some(joined)
        } else {
            None
        }
    }

    /// First match across the date pattern families, in priority order.
    /// A bare 8-digit block is reformatted as DD/MM/YYYY.
    fn extract_date(cleaned: &str) -> Option<String> {
        for pattern in DATE_PATTERNS.iter() {
            if let Some(m) = pattern.find(cleaned) {
                let value = m.as_str();
                if value.len() == 8 && value.chars().all(|c| c.is_ascii_digit()) {
                    return Some(format!(
                        "{}/{}/{}",
                        &value[..2],
                        &value[2..4],
                        &value[4..]
                    ));
                }
                return Some(value.to_string());
            }
        }
        None
    }

    /// Keyword match at word granularity; the address span itself is never
    /// delimited.
    fn has_address_marker(cleaned: &str) -> bool {
        let tokens: Vec<&str> = cleaned.split(' ').collect();
        ADDRESS_KEYWORDS.iter().any(|kw| {
            if kw.contains(' ') {
                cleaned.contains(kw)
            } else {
                tokens.contains(kw)
            }
        })
    }
}
