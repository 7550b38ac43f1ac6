/// A named document category with the keyword set used for coarse
/// classification. Registry order is the tie-break priority.
pub struct DocumentTemplate {
    pub document: &'static str,
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

/// Fixed template registry. First-registered wins a score tie, so the
/// order here is a documented priority list.
pub const DOCUMENT_TEMPLATES: [DocumentTemplate; 4] = [
    DocumentTemplate {
        document: "Aadhaar Card",
        category: "Proof of Identity",
        keywords: &[
            "AADHAAR",
            "UIDAI",
            "UNIQUE IDENTIFICATION",
            "GOVERNMENT OF INDIA",
        ],
    },
    DocumentTemplate {
        document: "PAN Card",
        category: "Proof of Identity",
        keywords: &[
            "PERMANENT ACCOUNT NUMBER",
            "INCOME TAX DEPARTMENT",
            "PAN",
        ],
    },
    DocumentTemplate {
        document: "Birth Certificate",
        category: "Civil Registration",
        keywords: &[
            "BIRTH CERTIFICATE",
            "DATE OF BIRTH",
            "PLACE OF BIRTH",
            "REGISTRAR OF BIRTHS",
            "MUNICIPAL",
        ],
    },
    DocumentTemplate {
        document: "EWS Certificate",
        category: "Income / Caste Certificate",
        keywords: &[
            "ECONOMICALLY WEAKER SECTION",
            "EWS CERTIFICATE",
            "INCOME CERTIFICATE",
            "REVENUE DEPARTMENT",
            "TEHSILDAR",
        ],
    },
];

/// Context keywords that corroborate an Aadhaar number found nearby.
pub const AADHAAR_CONTEXT_KEYWORDS: [&str; 3] =
    ["AADHAAR", "UIDAI", "UNIQUE IDENTIFICATION"];

/// Context keywords that corroborate a PAN pattern match.
pub const PAN_CONTEXT_KEYWORDS: [&str; 3] =
    ["INCOME TAX", "PERMANENT ACCOUNT NUMBER", "PAN"];

/// Any of these marks the presence of an address block. The span itself is
/// never delimited.
pub const ADDRESS_KEYWORDS: [&str; 9] = [
    "ADDRESS",
    "VILLAGE",
    "ROAD",
    "DISTRICT",
    "STATE",
    "PIN",
    "PO",
    "VTC",
    "SUB DISTRICT",
];

/// Institutional words that disqualify a candidate name run.
pub const NAME_DENYLIST: [&str; 7] = [
    "GOVERNMENT",
    "INDIA",
    "UNIQUE",
    "IDENTIFICATION",
    "AUTHORITY",
    "AADHAAR",
    "ENROLMENT",
];

/// Categories that count as government-issued identity for the confidence
/// bonus.
pub const GOVERNMENT_ID_CATEGORIES: [&str; 2] = ["Government ID", "Proof of Identity"];

/// Count how many of the given context keywords appear in normalized text.
/// Matching is space-insensitive so OCR-broken keywords still count.
pub fn context_keyword_count(normalized: &str, keywords: &[&str]) -> usize {
    let squeezed = normalized.replace(' ', "");
    keywords
        .iter()
        .filter(|kw| squeezed.contains(&kw.replace(' ', "")))
        .count()
}
