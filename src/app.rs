//! Application state and core logic

use crate::config::{BrokerProfile, IntakeConfig};
use crate::repository::{self, LeadRepository};
use crate::state::{IntakeForm, Step, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Hint shown when Enter is pressed before the step's required fields are valid
const INCOMPLETE_STEP_HINT: &str = "필수 항목을 입력해 주세요";

/// Hint shown when submit is requested without consent
const CONSENT_REQUIRED_HINT: &str = "개인정보 수집 및 이용에 동의해 주세요";

/// Main application struct
pub struct App {
    /// Wizard state
    pub form: IntakeForm,
    /// Display-only broker details
    pub broker: BrokerProfile,
    /// Lead store opened at start-up
    repository: Box<dyn LeadRepository>,
    /// Submit accepted; the insert runs on the next loop iteration
    submit_requested: bool,
    /// Whether the app should quit
    quit: bool,
    /// Transient hint for the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance from loaded configuration.
    ///
    /// A missing store setting does not prevent start-up: the wizard stays
    /// usable and every submission fails until the deployment is fixed.
    pub fn new(config: &IntakeConfig) -> Self {
        let repository = repository::connect(&config.repository_config());
        Self::with_repository(repository, config.broker_profile())
    }

    pub fn with_repository(repository: Box<dyn LeadRepository>, broker: BrokerProfile) -> Self {
        Self {
            form: IntakeForm::new(),
            broker,
            repository,
            submit_requested: false,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// True once a submission has been accepted and is waiting for the store
    pub fn has_pending_submission(&self) -> bool {
        self.submit_requested
    }

    /// True from the moment submit is accepted until the store answers
    pub fn is_submitting(&self) -> bool {
        self.submit_requested || self.form.is_submitting()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.status_message = None;

        if self.form.is_submitted() {
            return self.handle_success_key(key);
        }
        if self.is_submitting() {
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Esc => {
                if self.form.step() == Step::BasicInfo {
                    self.quit();
                } else {
                    self.form.go_back();
                }
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.form.step() == Step::ConfirmAndSubmit {
                    self.request_submit();
                }
            }
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_from_clipboard();
            }
            KeyCode::Char(' ') if self.form.step() == Step::ConfirmAndSubmit => {
                self.form.toggle_agreement();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.form.input_char(c)
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => self.handle_enter(),
            _ => {}
        }
        Ok(())
    }

    fn handle_enter(&mut self) {
        if self.form.active_field().is_some_and(|f| f.is_multiline()) {
            self.form.input_newline();
            return;
        }

        if self.form.step() == Step::ConfirmAndSubmit {
            self.request_submit();
        } else if !self.form.advance() {
            self.status_message = Some(INCOMPLETE_STEP_HINT.to_string());
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) -> Result<()> {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            self.quit();
        }
        Ok(())
    }

    /// Accept a submit request if the confirm step allows it
    fn request_submit(&mut self) {
        if self.form.can_submit() {
            self.submit_requested = true;
        } else if !self.form.draft().agreed_to_policy {
            self.status_message = Some(CONSENT_REQUIRED_HINT.to_string());
        }
    }

    /// Run the accepted submission, if any, against the lead store.
    ///
    /// Called by the event loop after the "submitting" frame has been drawn.
    pub async fn process_pending_submission(&mut self) -> Option<SubmitOutcome> {
        if !std::mem::take(&mut self.submit_requested) {
            return None;
        }
        Some(self.form.submit(self.repository.as_ref()).await)
    }

    fn paste_from_clipboard(&mut self) {
        match read_clipboard() {
            Ok(text) => self.form.paste(&text),
            Err(err) => {
                tracing::debug!(error = %err, "clipboard unavailable");
                self.status_message = Some("클립보드를 읽을 수 없습니다".to_string());
            }
        }
    }
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
