use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{field, ExtractedFields, FieldCheck, FieldValidation};
use crate::validation::verhoeff::verhoeff_check;

lazy_static! {
    static ref PAN_EXACT: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap();
    static ref DATE_LABEL: Regex = Regex::new(r"^(?:DOB|DATE)[:\s]*").unwrap();
}

const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

pub struct FieldValidator;

impl FieldValidator {
    /// Check each extracted field for format and plausibility. The result is
    /// total over the input's keys: fields without a dedicated rule fall
    /// through to a generic presence check.
    pub fn validate(fields: &ExtractedFields) -> FieldValidation {
        let mut validation = FieldValidation::new();

        for (name, value) in fields {
            let check = match name.as_str() {
                field::NAME => Self::check_name(value.as_deref()),
                field::DATE => Self::check_date(value.as_deref()),
                field::AADHAAR_NUMBER => Self::check_aadhaar(value.as_deref()),
                field::PAN_NUMBER => Self::check_pan(value.as_deref()),
                field::ADDRESS => Self::check_address(value.as_deref()),
                _ => Self::check_generic(value.as_deref()),
            };
            validation.insert(name.clone(), check);
        }

        validation
    }

    fn check_name(value: Option<&str>) -> FieldCheck {
        match value {
            Some(name) if name.len() >= 4 => FieldCheck::pass("Valid name format"),
            _ => FieldCheck::fail("Missing or invalid name"),
        }
    }

    /// Calendar validity rides on the parse itself: 31/02/2020 fails
    /// `%d/%m/%Y` outright.
    fn check_date(value: Option<&str>) -> FieldCheck {
        let Some(date) = value else {
            return FieldCheck::fail("Date not found");
        };
        let stripped = DATE_LABEL.replace(date, "");
        let parses = DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(stripped.as_ref(), fmt).is_ok());
        if parses {
            FieldCheck::pass("Valid date format")
        } else {
            FieldCheck::fail("Invalid date format")
        }
    }

    /// Wrong length and wrong checksum are reported distinctly.
    fn check_aadhaar(value: Option<&str>) -> FieldCheck {
        let Some(number) = value else {
            return FieldCheck::fail("Aadhaar not found");
        };
        let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 12 {
            return FieldCheck::fail("Aadhaar must be 12 digits");
        }
        if verhoeff_check(&digits) {
            FieldCheck::pass("Valid Aadhaar")
        } else {
            FieldCheck::fail("Invalid Aadhaar checksum")
        }
    }

    fn check_pan(value: Option<&str>) -> FieldCheck {
        match value {
            Some(pan) if PAN_EXACT.is_match(pan) => FieldCheck::pass("Valid PAN pattern"),
            Some(_) => FieldCheck::fail("Invalid PAN pattern"),
            None => FieldCheck::fail("PAN not found"),
        }
    }

    fn check_address(value: Option<&str>) -> FieldCheck {
        match value {
            Some(_) => FieldCheck::pass("Address detected"),
            None => FieldCheck::fail("Address missing"),
        }
    }

    fn check_generic(value: Option<&str>) -> FieldCheck {
        match value {
            Some(v) if !v.is_empty() => FieldCheck::pass("Valid"),
            _ => FieldCheck::fail("Missing or unreadable"),
        }
    }
}
