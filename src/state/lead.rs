//! Lead draft, persisted record, and input masks

use serde::{Deserialize, Serialize};

/// Literal joining the filing year and sequence of an auction case number
pub const CASE_NUMBER_INFIX: &str = "타경";

/// Maximum digits kept by the phone mask
pub const PHONE_MAX_DIGITS: usize = 11;

/// Minimum digits required before the contact step can be left
pub const PHONE_MIN_DIGITS: usize = 10;

/// Exact length of a case filing year
pub const CASE_YEAR_LEN: usize = 4;

/// Maximum length of a case sequence number
pub const CASE_SEQUENCE_MAX_LEN: usize = 6;

/// Count ASCII digits in a string
pub fn count_digits(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Keep only ASCII digits, truncated to `max_len`
pub fn digits_only(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_len)
        .collect()
}

/// Render a phone number with the `DDD-DDDD-DDDD` mask.
///
/// Non-digits are stripped and at most 11 digits are kept. Up to three digits
/// are returned as-is, up to seven get one dash after the prefix, anything
/// longer gets a second dash after the seventh digit. Applying the mask to its
/// own output is a no-op.
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw, PHONE_MAX_DIGITS);
    match digits.len() {
        0..=3 => digits,
        4..=7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
    }
}

/// Compose a court auction case number from its year and sequence
pub fn full_case_number(year: &str, sequence: &str) -> String {
    format!("{}{}{}", year.trim(), CASE_NUMBER_INFIX, sequence.trim())
}

/// In-progress intake data for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    /// Stored with the display mask applied
    pub phone: String,
    pub case_year: String,
    pub case_sequence: String,
    pub property_number: String,
    pub inquiry: String,
    pub agreed_to_policy: bool,
}

impl LeadDraft {
    /// Case number as it will be persisted
    pub fn full_case_number(&self) -> String {
        full_case_number(&self.case_year, &self.case_sequence)
    }

    /// Name present and phone long enough to call back
    pub fn has_contact_info(&self) -> bool {
        !self.name.trim().is_empty() && count_digits(&self.phone) >= PHONE_MIN_DIGITS
    }

    /// Four-digit year and a non-empty sequence
    pub fn has_case_info(&self) -> bool {
        self.case_year.trim().len() == CASE_YEAR_LEN && !self.case_sequence.trim().is_empty()
    }

    /// Build the row to insert from the current draft
    pub fn to_record(&self) -> LeadRecord {
        LeadRecord {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            case_number: self.full_case_number(),
            property_number: non_blank(&self.property_number),
            inquiry: non_blank(&self.inquiry),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A submitted lead, one row in the `leads` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub name: String,
    pub phone: String,
    pub case_number: String,
    pub property_number: Option<String>,
    pub inquiry: Option<String>,
}
