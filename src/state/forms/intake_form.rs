//! Intake wizard controller
//!
//! Owns the draft and the wizard position, enforces the step guards, and runs
//! the single insert that finishes a session. Rendering code only reads from
//! here; every mutation goes through the methods below.

use super::field::FieldId;
use super::step::{Guard, Step, Transition};
use crate::repository::{LeadRepository, RepositoryError};
use crate::state::lead::{LeadDraft, LeadRecord};
use tracing::{debug, error, info, warn};

/// Message shown for every failed submission
pub const SUBMIT_FAILED_MESSAGE: &str = "제출 중 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.";

/// Why the last submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Store settings missing; needs an operator
    Configuration,
    /// Network or server rejection; retrying may help
    Transient,
}

/// A failed insert, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub kind: FailureKind,
    /// Rendered underlying error
    pub detail: String,
}

impl SubmissionFailure {
    fn from_error(err: &RepositoryError) -> Self {
        let kind = if err.is_configuration() {
            FailureKind::Configuration
        } else {
            FailureKind::Transient
        };
        Self {
            kind,
            detail: err.to_string(),
        }
    }

    /// User-facing text, identical for every kind
    pub fn message(&self) -> &'static str {
        SUBMIT_FAILED_MESSAGE
    }

    pub fn is_configuration(&self) -> bool {
        self.kind == FailureKind::Configuration
    }
}

/// Result of a submit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Row inserted; the wizard is finished
    Submitted,
    /// Insert failed; draft kept for retry
    Failed,
    /// Preconditions not met; nothing was sent
    Rejected,
}

/// State of one intake session
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    step: Step,
    draft: LeadDraft,
    submitting: bool,
    last_error: Option<SubmissionFailure>,
    /// Index into the current step's fields
    active_field_index: usize,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.step == Step::Submitted
    }

    /// User-facing error text from the last failed submission
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_ref().map(SubmissionFailure::message)
    }

    #[cfg(test)]
    pub fn last_failure(&self) -> Option<&SubmissionFailure> {
        self.last_error.as_ref()
    }

    fn is_locked(&self) -> bool {
        self.submitting || self.is_submitted()
    }

    // Field editing

    /// Assign a field, applying its input mask
    pub fn set_field(&mut self, field: FieldId, raw: &str) {
        if self.is_locked() {
            return;
        }
        let value = field.mask().apply(raw);
        *self.field_mut(field) = value;
    }

    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.draft.name,
            FieldId::Phone => &self.draft.phone,
            FieldId::CaseYear => &self.draft.case_year,
            FieldId::CaseSequence => &self.draft.case_sequence,
            FieldId::PropertyNumber => &self.draft.property_number,
            FieldId::Inquiry => &self.draft.inquiry,
        }
    }

    fn field_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.draft.name,
            FieldId::Phone => &mut self.draft.phone,
            FieldId::CaseYear => &mut self.draft.case_year,
            FieldId::CaseSequence => &mut self.draft.case_sequence,
            FieldId::PropertyNumber => &mut self.draft.property_number,
            FieldId::Inquiry => &mut self.draft.inquiry,
        }
    }

    pub fn set_agreed(&mut self, agreed: bool) {
        if self.is_locked() {
            return;
        }
        self.draft.agreed_to_policy = agreed;
    }

    pub fn toggle_agreement(&mut self) {
        self.set_agreed(!self.draft.agreed_to_policy);
    }

    // Focus within the current step

    pub fn active_field(&self) -> Option<FieldId> {
        self.step.fields().get(self.active_field_index).copied()
    }

    pub fn next_field(&mut self) {
        let count = self.step.fields().len();
        if count > 0 {
            self.active_field_index = (self.active_field_index + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.step.fields().len();
        if count == 0 {
            return;
        }
        if self.active_field_index == 0 {
            self.active_field_index = count - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            let mut value = self.field(field).to_string();
            value.push(c);
            self.set_field(field, &value);
        }
    }

    /// Insert a newline when the focused field accepts one
    pub fn input_newline(&mut self) {
        if self.active_field().is_some_and(|f| f.is_multiline()) {
            self.input_char('\n');
        }
    }

    /// Append pasted text to the focused field
    pub fn paste(&mut self, text: &str) {
        if let Some(field) = self.active_field() {
            let text = if field.is_multiline() {
                text.to_string()
            } else {
                text.replace(['\r', '\n'], " ")
            };
            let value = format!("{}{}", self.field(field), text);
            self.set_field(field, &value);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_locked() {
            return;
        }
        if let Some(field) = self.active_field() {
            let value = field.mask().backspace(self.field(field));
            *self.field_mut(field) = value;
        }
    }

    // Guards

    pub fn can_advance_from_basic_info(&self) -> bool {
        self.draft.has_contact_info()
    }

    pub fn can_advance_from_case_info(&self) -> bool {
        self.draft.has_case_info()
    }

    pub fn can_submit(&self) -> bool {
        self.step == Step::ConfirmAndSubmit && self.draft.agreed_to_policy && !self.submitting
    }

    fn guard_holds(&self, guard: Guard) -> bool {
        match guard {
            Guard::ContactInfo => self.can_advance_from_basic_info(),
            Guard::CaseInfo => self.can_advance_from_case_info(),
        }
    }

    /// True when the forward control of the current step should be enabled
    pub fn can_advance(&self) -> bool {
        self.step
            .next()
            .is_some_and(|next| match self.step.transition_to(next) {
                Transition::Forward(guard) => self.guard_holds(guard),
                Transition::Backward => true,
                Transition::Invalid => false,
            })
    }

    // Transitions

    /// Move to `target` if the transition table and its guard allow it.
    ///
    /// Returns whether the step changed.
    pub fn go_to(&mut self, target: Step) -> bool {
        if self.submitting {
            debug!(from = ?self.step, to = ?target, "transition ignored while submitting");
            return false;
        }

        let allowed = match self.step.transition_to(target) {
            Transition::Backward => true,
            Transition::Forward(guard) => self.guard_holds(guard),
            Transition::Invalid => false,
        };

        if !allowed {
            debug!(from = ?self.step, to = ?target, "transition rejected");
            return false;
        }

        debug!(from = ?self.step, to = ?target, "step changed");
        self.step = target;
        self.active_field_index = 0;
        true
    }

    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => self.go_to(next),
            None => false,
        }
    }

    pub fn go_back(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => self.go_to(prev),
            None => false,
        }
    }

    // Submission

    /// Start a submission and return the record to insert.
    ///
    /// Returns `None` without touching state when submission is not allowed,
    /// including while another submission is in flight.
    pub fn begin_submission(&mut self) -> Option<LeadRecord> {
        if !self.can_submit() {
            debug!(
                step = ?self.step,
                agreed = self.draft.agreed_to_policy,
                submitting = self.submitting,
                "submit rejected"
            );
            return None;
        }

        self.submitting = true;
        self.last_error = None;
        Some(self.draft.to_record())
    }

    /// Record the result of the insert started by [`begin_submission`](Self::begin_submission)
    pub fn complete_submission(&mut self, result: Result<(), RepositoryError>) -> SubmitOutcome {
        if !self.submitting {
            warn!("submission result received with no submission in flight");
            return SubmitOutcome::Rejected;
        }
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("lead submitted");
                self.step = Step::Submitted;
                self.active_field_index = 0;
                SubmitOutcome::Submitted
            }
            Err(err) => {
                let failure = SubmissionFailure::from_error(&err);
                if failure.is_configuration() {
                    error!(error = %failure.detail, "lead store misconfigured, submission failed");
                } else {
                    warn!(error = %failure.detail, "lead submission failed");
                }
                self.last_error = Some(failure);
                SubmitOutcome::Failed
            }
        }
    }

    /// Submit the draft through `repository`, waiting for the insert to finish
    pub async fn submit(&mut self, repository: &dyn LeadRepository) -> SubmitOutcome {
        let Some(record) = self.begin_submission() else {
            return SubmitOutcome::Rejected;
        };
        let result = repository.insert(&record).await;
        self.complete_submission(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{ConfigurationError, MockLeadRepository};

    fn form_at_step(step: Step) -> IntakeForm {
        let mut form = IntakeForm::new();
        form.set_field(FieldId::Name, "홍길동");
        form.set_field(FieldId::Phone, "01012345678");
        form.set_field(FieldId::CaseYear, "2024");
        form.set_field(FieldId::CaseSequence, "6");
        if step == Step::BasicInfo {
            return form;
        }
        assert!(form.go_to(Step::CaseInfo));
        if step == Step::CaseInfo {
            return form;
        }
        assert!(form.go_to(Step::ConfirmAndSubmit));
        form
    }

    fn server_error() -> RepositoryError {
        RepositoryError::Server {
            status: 503,
            body: "unavailable".to_string(),
        }
    }

    mod fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_empty() {
            let form = IntakeForm::new();
            assert_eq!(form.step(), Step::BasicInfo);
            assert_eq!(form.draft(), &LeadDraft::default());
            assert!(!form.is_submitting());
            assert!(!form.is_submitted());
            assert!(form.last_error().is_none());
            assert_eq!(form.active_field(), Some(FieldId::Name));
        }

        #[test]
        fn test_phone_is_masked_on_assignment() {
            let mut form = IntakeForm::new();
            form.set_field(FieldId::Phone, "01012345678");
            assert_eq!(form.draft().phone, "010-1234-5678");
        }

        #[test]
        fn test_case_fields_keep_digits_only() {
            let mut form = IntakeForm::new();
            form.set_field(FieldId::CaseYear, "20245");
            form.set_field(FieldId::CaseSequence, "12a3456789");
            assert_eq!(form.draft().case_year, "2024");
            assert_eq!(form.draft().case_sequence, "123456");
        }

        #[test]
        fn test_free_fields_are_verbatim() {
            let mut form = IntakeForm::new();
            form.set_field(FieldId::PropertyNumber, " 2 ");
            assert_eq!(form.draft().property_number, " 2 ");
        }

        #[test]
        fn test_typing_into_phone_builds_mask() {
            let mut form = IntakeForm::new();
            form.next_field();
            assert_eq!(form.active_field(), Some(FieldId::Phone));
            for c in "01012345678".chars() {
                form.input_char(c);
            }
            assert_eq!(form.draft().phone, "010-1234-5678");

            form.backspace();
            assert_eq!(form.draft().phone, "010-1234-567");
        }

        #[test]
        fn test_typing_letters_into_year_is_ignored() {
            let mut form = form_at_step(Step::CaseInfo);
            form.set_field(FieldId::CaseYear, "");
            for c in "2a0b2c4d9".chars() {
                form.input_char(c);
            }
            assert_eq!(form.draft().case_year, "2024");
        }

        #[test]
        fn test_newline_only_in_inquiry() {
            let mut form = form_at_step(Step::CaseInfo);
            form.input_newline();
            assert_eq!(form.draft().case_year, "2024");

            form.prev_field();
            assert_eq!(form.active_field(), Some(FieldId::Inquiry));
            form.input_char('a');
            form.input_newline();
            form.input_char('b');
            assert_eq!(form.draft().inquiry, "a\nb");
        }

        #[test]
        fn test_paste_goes_through_mask() {
            let mut form = IntakeForm::new();
            form.next_field();
            form.paste("010 1234 5678\n");
            assert_eq!(form.draft().phone, "010-1234-5678");
        }

        #[test]
        fn test_field_focus_wraps() {
            let mut form = IntakeForm::new();
            form.next_field();
            form.next_field();
            assert_eq!(form.active_field(), Some(FieldId::Name));
            form.prev_field();
            assert_eq!(form.active_field(), Some(FieldId::Phone));
        }

        #[test]
        fn test_confirm_step_has_no_focusable_field() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            assert_eq!(form.active_field(), None);
            form.next_field();
            form.input_char('x');
            assert_eq!(form.draft().name, "홍길동");
        }
    }

    mod guards {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_basic_info_scenario() {
            let mut form = IntakeForm::new();
            form.set_field(FieldId::Name, "홍길동");
            form.set_field(FieldId::Phone, "01012345678");
            assert_eq!(form.draft().phone, "010-1234-5678");
            assert!(form.can_advance_from_basic_info());
            assert!(form.go_to(Step::CaseInfo));
            assert_eq!(form.step(), Step::CaseInfo);
        }

        #[test]
        fn test_basic_info_blocks_empty_name() {
            let mut form = IntakeForm::new();
            form.set_field(FieldId::Phone, "01012345678");
            assert!(!form.can_advance_from_basic_info());
            assert!(!form.go_to(Step::CaseInfo));
            assert_eq!(form.step(), Step::BasicInfo);
        }

        #[test]
        fn test_basic_info_blocks_nine_digit_phone() {
            let mut form = IntakeForm::new();
            form.set_field(FieldId::Name, "홍길동");
            form.set_field(FieldId::Phone, "010123456");
            assert!(!form.can_advance_from_basic_info());
            assert!(!form.can_advance());
        }

        #[test]
        fn test_case_info_blocks_short_year() {
            let mut form = form_at_step(Step::CaseInfo);
            form.set_field(FieldId::CaseYear, "202");
            assert!(!form.can_advance_from_case_info());
            assert!(!form.advance());
            assert_eq!(form.step(), Step::CaseInfo);
        }

        #[test]
        fn test_case_info_blocks_empty_sequence() {
            let mut form = form_at_step(Step::CaseInfo);
            form.set_field(FieldId::CaseSequence, "");
            assert!(!form.can_advance_from_case_info());
            assert!(!form.go_to(Step::ConfirmAndSubmit));
        }

        #[test]
        fn test_cannot_jump_from_first_to_last_step() {
            let mut form = form_at_step(Step::BasicInfo);
            assert!(form.can_advance_from_case_info());
            assert!(!form.go_to(Step::ConfirmAndSubmit));
            assert_eq!(form.step(), Step::BasicInfo);
        }

        #[test]
        fn test_backward_moves_ignore_guards() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_field(FieldId::Name, "");
            assert!(form.go_to(Step::BasicInfo));
            assert_eq!(form.step(), Step::BasicInfo);
            assert!(!form.go_back());
        }

        #[test]
        fn test_cannot_enter_submitted_directly() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_agreed(true);
            assert!(!form.go_to(Step::Submitted));
            assert!(!form.is_submitted());
        }

        #[test]
        fn test_step_change_resets_focus() {
            let mut form = form_at_step(Step::BasicInfo);
            form.next_field();
            assert!(form.advance());
            assert_eq!(form.active_field(), Some(FieldId::CaseYear));
        }

        #[test]
        fn test_can_advance_follows_current_step_guard() {
            let mut form = IntakeForm::new();
            assert!(!form.can_advance());
            form.set_field(FieldId::Name, "홍길동");
            form.set_field(FieldId::Phone, "0101234567");
            assert!(form.can_advance());

            assert!(form.advance());
            assert!(!form.can_advance());
            form.set_field(FieldId::CaseYear, "2024");
            form.set_field(FieldId::CaseSequence, "1");
            assert!(form.can_advance());

            assert!(form.advance());
            assert!(!form.can_advance());
        }

        #[test]
        fn test_can_submit_requires_agreement_and_confirm_step() {
            let mut form = form_at_step(Step::CaseInfo);
            form.set_agreed(true);
            assert!(!form.can_submit());
            assert!(form.advance());
            assert!(form.can_submit());
            form.toggle_agreement();
            assert!(!form.can_submit());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_without_agreement_is_noop() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            let mut repo = MockLeadRepository::new();
            repo.expect_insert().times(0);

            assert_eq!(form.submit(&repo).await, SubmitOutcome::Rejected);
            assert!(!form.is_submitted());
            assert!(!form.is_submitting());
        }

        #[tokio::test]
        async fn test_successful_submit_sends_composed_record() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_agreed(true);

            let mut repo = MockLeadRepository::new();
            repo.expect_insert()
                .times(1)
                .withf(|record| {
                    *record
                        == LeadRecord {
                            name: "홍길동".to_string(),
                            phone: "010-1234-5678".to_string(),
                            case_number: "2024타경6".to_string(),
                            property_number: None,
                            inquiry: None,
                        }
                })
                .returning(|_| Ok(()));

            assert_eq!(form.submit(&repo).await, SubmitOutcome::Submitted);
            assert!(form.is_submitted());
            assert!(!form.is_submitting());
            assert_eq!(form.step(), Step::Submitted);
        }

        #[tokio::test]
        async fn test_optional_fields_are_trimmed() {
            let mut form = form_at_step(Step::CaseInfo);
            form.set_field(FieldId::PropertyNumber, " 3 ");
            form.set_field(FieldId::Inquiry, "  대항력 있는 임차인?  ");
            assert!(form.advance());
            form.set_agreed(true);

            let mut repo = MockLeadRepository::new();
            repo.expect_insert()
                .times(1)
                .withf(|record| {
                    record.property_number.as_deref() == Some("3")
                        && record.inquiry.as_deref() == Some("대항력 있는 임차인?")
                })
                .returning(|_| Ok(()));

            assert_eq!(form.submit(&repo).await, SubmitOutcome::Submitted);
        }

        #[tokio::test]
        async fn test_failed_submit_keeps_draft_for_retry() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_agreed(true);
            let before = form.draft().clone();

            let mut repo = MockLeadRepository::new();
            repo.expect_insert()
                .times(1)
                .returning(|_| Err(server_error()));

            assert_eq!(form.submit(&repo).await, SubmitOutcome::Failed);
            assert_eq!(form.last_error(), Some(SUBMIT_FAILED_MESSAGE));
            assert!(!form.is_submitting());
            assert!(!form.is_submitted());
            assert_eq!(form.step(), Step::ConfirmAndSubmit);
            assert_eq!(form.draft(), &before);

            let failure = form.last_failure().unwrap();
            assert_eq!(failure.kind, FailureKind::Transient);
            assert!(failure.detail.contains("503"));
        }

        #[tokio::test]
        async fn test_retry_after_failure_clears_error() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_agreed(true);

            let mut first = MockLeadRepository::new();
            first.expect_insert().returning(|_| Err(server_error()));
            assert_eq!(form.submit(&first).await, SubmitOutcome::Failed);

            let mut second = MockLeadRepository::new();
            second.expect_insert().times(1).returning(|_| Ok(()));
            assert_eq!(form.submit(&second).await, SubmitOutcome::Submitted);
            assert!(form.last_error().is_none());
        }

        #[tokio::test]
        async fn test_configuration_error_uses_generic_message() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_agreed(true);

            let mut repo = MockLeadRepository::new();
            repo.expect_insert().returning(|_| {
                Err(RepositoryError::Configuration(ConfigurationError {
                    variable: "AUCTION_INTAKE_STORE_URL",
                }))
            });

            assert_eq!(form.submit(&repo).await, SubmitOutcome::Failed);
            assert_eq!(form.last_error(), Some(SUBMIT_FAILED_MESSAGE));
            assert!(form.last_failure().unwrap().is_configuration());
        }

        #[tokio::test]
        async fn test_submitted_state_is_terminal() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_agreed(true);

            let mut repo = MockLeadRepository::new();
            repo.expect_insert().times(1).returning(|_| Ok(()));
            assert_eq!(form.submit(&repo).await, SubmitOutcome::Submitted);

            let snapshot = form.draft().clone();
            form.set_field(FieldId::Name, "김철수");
            form.set_agreed(false);
            assert!(!form.go_to(Step::BasicInfo));
            assert!(!form.go_back());
            assert_eq!(form.submit(&repo).await, SubmitOutcome::Rejected);

            assert!(form.is_submitted());
            assert_eq!(form.draft(), &snapshot);
        }

        #[test]
        fn test_only_one_submission_in_flight() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_agreed(true);

            assert!(form.begin_submission().is_some());
            assert!(form.is_submitting());
            assert!(!form.can_submit());
            assert!(form.begin_submission().is_none());
        }

        #[test]
        fn test_draft_frozen_while_submitting() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_agreed(true);
            let record = form.begin_submission().unwrap();

            form.set_field(FieldId::Name, "김철수");
            assert!(!form.go_back());
            assert_eq!(form.draft().name, record.name);
            assert_eq!(form.step(), Step::ConfirmAndSubmit);
        }

        #[test]
        fn test_completion_without_begin_is_rejected() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            assert_eq!(form.complete_submission(Ok(())), SubmitOutcome::Rejected);
            assert!(!form.is_submitted());
        }

        #[test]
        fn test_begin_clears_previous_error() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_agreed(true);
            form.begin_submission();
            form.complete_submission(Err(server_error()));
            assert!(form.last_error().is_some());

            form.begin_submission();
            assert!(form.last_error().is_none());
        }

        #[test]
        fn test_submit_on_blocking_executor() {
            let mut form = form_at_step(Step::ConfirmAndSubmit);
            form.set_agreed(true);
            let mut repo = MockLeadRepository::new();
            repo.expect_insert().times(1).returning(|_| Ok(()));

            let outcome = tokio_test::block_on(form.submit(&repo));
            assert_eq!(outcome, SubmitOutcome::Submitted);
        }
    }
}
