//! Wizard steps and their transition table

use super::field::FieldId;

/// Wizard steps in order, plus the terminal state reached after a successful insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    BasicInfo,
    CaseInfo,
    ConfirmAndSubmit,
    Submitted,
}

/// Condition that must hold before a forward move is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Name and a callable phone number
    ContactInfo,
    /// Complete case number
    CaseInfo,
}

/// Classification of a requested step change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Return to an earlier input step, always allowed
    Backward,
    /// Advance one step once the guard holds
    Forward(Guard),
    /// Not in the transition table
    Invalid,
}

impl Step {
    /// Input steps shown in the indicator
    pub const INPUT_STEPS: [Step; 3] = [Step::BasicInfo, Step::CaseInfo, Step::ConfirmAndSubmit];

    /// 1-based position of an input step
    pub fn number(&self) -> usize {
        match self {
            Step::BasicInfo => 1,
            Step::CaseInfo => 2,
            Step::ConfirmAndSubmit | Step::Submitted => 3,
        }
    }

    /// Short label for the step indicator
    pub fn label(&self) -> &'static str {
        match self {
            Step::BasicInfo => "기본 정보",
            Step::CaseInfo => "사건 정보",
            Step::ConfirmAndSubmit => "동의 및 제출",
            Step::Submitted => "접수 완료",
        }
    }

    /// Heading shown above the step's fields
    pub fn title(&self) -> &'static str {
        match self {
            Step::BasicInfo => "기본 정보 입력",
            Step::CaseInfo => "사건 정보 입력",
            Step::ConfirmAndSubmit => "동의 및 최종 제출",
            Step::Submitted => "의뢰가 접수되었습니다!",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Step::BasicInfo => "연락 가능한 정보를 입력해 주세요",
            Step::CaseInfo => "분석을 의뢰할 물건 정보를 입력해 주세요",
            Step::ConfirmAndSubmit => "입력하신 내용을 확인해 주세요",
            Step::Submitted => "",
        }
    }

    /// Editable fields on this step, in focus order
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            Step::BasicInfo => &[FieldId::Name, FieldId::Phone],
            Step::CaseInfo => &[
                FieldId::CaseYear,
                FieldId::CaseSequence,
                FieldId::PropertyNumber,
                FieldId::Inquiry,
            ],
            Step::ConfirmAndSubmit | Step::Submitted => &[],
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::BasicInfo => Some(Step::CaseInfo),
            Step::CaseInfo => Some(Step::ConfirmAndSubmit),
            Step::ConfirmAndSubmit | Step::Submitted => None,
        }
    }

    pub fn prev(&self) -> Option<Step> {
        match self {
            Step::BasicInfo | Step::Submitted => None,
            Step::CaseInfo => Some(Step::BasicInfo),
            Step::ConfirmAndSubmit => Some(Step::CaseInfo),
        }
    }

    /// Look up a move from `self` to `target` in the transition table.
    ///
    /// `Submitted` is only entered by a successful insert and never left.
    pub fn transition_to(&self, target: Step) -> Transition {
        use Step::*;
        match (*self, target) {
            (Submitted, _) | (_, Submitted) => Transition::Invalid,
            (CaseInfo, BasicInfo) | (ConfirmAndSubmit, BasicInfo) | (ConfirmAndSubmit, CaseInfo) => {
                Transition::Backward
            }
            (BasicInfo, CaseInfo) => Transition::Forward(Guard::ContactInfo),
            (CaseInfo, ConfirmAndSubmit) => Transition::Forward(Guard::CaseInfo),
            _ => Transition::Invalid,
        }
    }
}
