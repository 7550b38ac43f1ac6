use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::templates::AADHAAR_CONTEXT_KEYWORDS;
use crate::processing::normalize::normalize;
use crate::validation::verhoeff::verhoeff_check;

lazy_static! {
    // 12-digit candidate, optionally printed as 4-4-4 groups. Digits 0 and 1
    // never begin a valid number.
    static ref AADHAAR_CANDIDATE: Regex =
        Regex::new(r"\b[2-9]\d{3}\s?\d{4}\s?\d{4}\b").unwrap();
    // 5 letters, 4 digits, 1 letter. PAN has no check digit; the pattern
    // alone is the whole test.
    static ref PAN_PATTERN: Regex = Regex::new(r"\b[A-Z]{5}[0-9]{4}[A-Z]\b").unwrap();
}

/// Find a checksum-validated 12-digit identifier, or `None`. Scans both the
/// normalized text and the raw text with everything but digits and spaces
/// stripped, since OCR noise can break either view. Among validated
/// candidates, one whose raw line also carries an Aadhaar context keyword is
/// preferred; otherwise the last match wins (later lines are where the
/// printed number usually sits). Never errors.
pub fn extract_aadhaar(raw: &str, normalized: &str) -> Option<String> {
    let mut best: Option<String> = None;
    let mut best_with_context: Option<String> = None;

    for line in raw.lines() {
        let line_norm = normalize(line);
        let digitish: String = line
            .chars()
            .filter(|c| c.is_ascii_digit() || c.is_whitespace())
            .collect();
        let has_context = line_has_context(&line_norm);

        for source in [line_norm.as_str(), digitish.as_str()] {
            for m in AADHAAR_CANDIDATE.find_iter(source) {
                let candidate: String =
                    m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
                if candidate.len() != 12 || looks_like_noise(&candidate) {
                    continue;
                }
                if !verhoeff_check(&candidate) {
                    debug!("candidate {} failed checksum", candidate);
                    continue;
                }
                if has_context {
                    best_with_context = Some(candidate.clone());
                }
                best = Some(candidate);
            }
        }
    }

    // Secondary pass over the whole-document views for OCR output that lost
    // its line structure.
    if best.is_none() {
        let digitish: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || c.is_whitespace())
            .collect();
        for source in [normalized, digitish.as_str()] {
            for m in AADHAAR_CANDIDATE.find_iter(source) {
                let candidate: String =
                    m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
                if candidate.len() == 12
                    && !looks_like_noise(&candidate)
                    && verhoeff_check(&candidate)
                {
                    best = Some(candidate);
                }
            }
        }
    }

    best_with_context.or(best)
}

/// Find the first PAN-style identifier in normalized text, or `None`.
pub fn extract_pan(normalized: &str) -> Option<String> {
    PAN_PATTERN
        .find(normalized)
        .map(|m| m.as_str().to_string())
}

fn line_has_context(line_norm: &str) -> bool {
    let squeezed = line_norm.replace(' ', "");
    AADHAAR_CONTEXT_KEYWORDS
        .iter()
        .any(|kw| squeezed.contains(&kw.replace(' ', "")))
}

/// Obvious OCR/test noise: one repeated digit, or a strict ascending or
/// descending run (mod 10). Such strings can still carry a passing checksum.
fn looks_like_noise(digits: &str) -> bool {
    let d: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    if d.len() < 4 {
        return false;
    }
    let repeated = d.iter().all(|&x| x == d[0]);
    let ascending = d.windows(2).all(|w| w[1] == (w[0] + 1) % 10);
    let descending = d.windows(2).all(|w| w[0] == (w[1] + 1) % 10);
    repeated || ascending || descending
}

#[cfg(test)]
mod tests {
    use super::*;

    // 234112345677 carries a valid Verhoeff check digit.
    const VALID: &str = "234112345677";

    #[test]
    fn test_extracts_spaced_number_with_context() {
        let raw = "UNIQUE IDENTIFICATION AUTHORITY\nAADHAAR 2341 1234 5677\n";
        let norm = normalize(raw);
        assert_eq!(extract_aadhaar(raw, &norm), Some(VALID.to_string()));
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let raw = "AADHAAR 2341 1234 5678";
        let norm = normalize(raw);
        assert_eq!(extract_aadhaar(raw, &norm), None);
    }

    #[test]
    fn test_first_digit_rule() {
        // Valid checksum but starts with 1, so it is never a candidate.
        let payload = "13411234567";
        let check = crate::validation::verhoeff::verhoeff_digit(payload).unwrap();
        let raw = format!("AADHAAR UIDAI {}{}", payload, check);
        let norm = normalize(&raw);
        assert_eq!(extract_aadhaar(&raw, &norm), None);
    }

    #[test]
    fn test_noise_filter() {
        assert!(looks_like_noise("222222222222"));
        assert!(looks_like_noise("234567890123"));
        assert!(looks_like_noise("987654321098"));
        assert!(!looks_like_noise(VALID));
    }

    #[test]
    fn test_context_line_preferred_over_later_match() {
        // Both numbers validate; the one on the AADHAAR line wins even
        // though the other appears later.
        let payload = "98765432101";
        let check = crate::validation::verhoeff::verhoeff_digit(payload).unwrap();
        let other = format!("{}{}", payload, check);
        let raw = format!("AADHAAR NO 2341 1234 5677\nREF {}", other);
        let norm = normalize(&raw);
        assert_eq!(extract_aadhaar(&raw, &norm), Some(VALID.to_string()));
    }

    #[test]
    fn test_survives_punctuation_noise() {
        let raw = "ID:2341-1234-5677 end";
        let norm = normalize(raw);
        // Digit-stripped view restores the run.
        assert_eq!(extract_aadhaar(raw, &norm), Some(VALID.to_string()));
    }

    #[test]
    fn test_pan_pattern() {
        let norm = normalize("Permanent Account Number ABCDE1234F");
        assert_eq!(extract_pan(&norm), Some("ABCDE1234F".to_string()));
        assert_eq!(extract_pan("ABCDE12345"), None);
        assert_eq!(extract_pan(""), None);
    }

    #[test]
    fn test_empty_and_garbage_inputs() {
        assert_eq!(extract_aadhaar("", ""), None);
        let raw = "!!!! ???? ....";
        assert_eq!(extract_aadhaar(raw, &normalize(raw)), None);
    }
}
