//! Form domain layer
//!
//! Type-safe handling of the three-step intake wizard: field identities and
//! masks, the step transition table, and the controller that ties them to the
//! lead store.

mod field;
mod intake_form;
mod step;

pub use field::FieldId;
pub use intake_form::{IntakeForm, SubmitOutcome};
pub use step::Step;

#[cfg(test)]
pub use intake_form::SUBMIT_FAILED_MESSAGE;
