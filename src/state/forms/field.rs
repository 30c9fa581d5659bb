//! Form field identities and input masks

use crate::state::lead::{
    digits_only, format_phone, CASE_SEQUENCE_MAX_LEN, CASE_YEAR_LEN, PHONE_MAX_DIGITS,
};

/// Normalization applied to a field on every assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMask {
    /// Stored verbatim
    Free,
    /// `DDD-DDDD-DDDD` phone mask
    Phone,
    /// ASCII digits only, truncated to the given length
    Digits(usize),
}

impl FieldMask {
    /// Normalize a raw value
    pub fn apply(&self, raw: &str) -> String {
        match self {
            FieldMask::Free => raw.to_string(),
            FieldMask::Phone => format_phone(raw),
            FieldMask::Digits(max_len) => digits_only(raw, *max_len),
        }
    }

    /// Value after removing the last logical character.
    ///
    /// For the phone mask the last digit is removed, never a lone dash.
    pub fn backspace(&self, current: &str) -> String {
        match self {
            FieldMask::Phone => {
                let mut digits = digits_only(current, PHONE_MAX_DIGITS);
                digits.pop();
                format_phone(&digits)
            }
            FieldMask::Free | FieldMask::Digits(_) => {
                let mut value = current.to_string();
                value.pop();
                value
            }
        }
    }
}

/// Every editable text field of the intake draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Phone,
    CaseYear,
    CaseSequence,
    PropertyNumber,
    Inquiry,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "이름",
            FieldId::Phone => "연락처",
            FieldId::CaseYear => "사건 연도",
            FieldId::CaseSequence => "사건 번호",
            FieldId::PropertyNumber => "물건번호",
            FieldId::Inquiry => "문의사항",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::Name => "홍길동",
            FieldId::Phone => "010-0000-0000",
            FieldId::CaseYear => "2024",
            FieldId::CaseSequence => "12345",
            FieldId::PropertyNumber => "예) 1, 2, 3 (여러 물건일 때만 입력)",
            FieldId::Inquiry => "궁금하신 점을 자유롭게 작성해 주세요",
        }
    }

    pub fn mask(&self) -> FieldMask {
        match self {
            FieldId::Phone => FieldMask::Phone,
            FieldId::CaseYear => FieldMask::Digits(CASE_YEAR_LEN),
            FieldId::CaseSequence => FieldMask::Digits(CASE_SEQUENCE_MAX_LEN),
            FieldId::Name | FieldId::PropertyNumber | FieldId::Inquiry => FieldMask::Free,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FieldId::PropertyNumber | FieldId::Inquiry)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldId::Inquiry)
    }
}
