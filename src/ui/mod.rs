//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::App;
use crate::state::Step;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = layout::create_layout(area);

    layout::draw_header(frame, layout.header, app);
    layout::draw_step_indicator(frame, layout.indicator, app.form.step());

    // Draw main content based on current step
    match app.form.step() {
        Step::BasicInfo => forms::draw_basic_info(frame, layout.content, app),
        Step::CaseInfo => forms::draw_case_info(frame, layout.content, app),
        Step::ConfirmAndSubmit => forms::draw_confirm(frame, layout.content, app),
        Step::Submitted => success::draw(frame, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrokerProfile;
    use crate::repository::MockLeadRepository;
    use crate::state::FieldId;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        App::with_repository(
            Box::new(MockLeadRepository::new()),
            BrokerProfile {
                phone: "010-9999-0000".to_string(),
                ..BrokerProfile::default()
            },
        )
    }

    fn filled_app() -> App {
        let mut app = app();
        app.form.set_field(FieldId::Name, "Hong");
        app.form.set_field(FieldId::Phone, "01012345678");
        app.form.set_field(FieldId::CaseYear, "2024");
        app.form.set_field(FieldId::CaseSequence, "12345");
        app
    }

    /// Render one frame and return the buffer's text, ASCII cells only
    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_basic_info_renders_values() {
        let app = filled_app();
        let screen = render(&app);
        assert!(screen.contains("Hong"));
        assert!(screen.contains("010-1234-5678"));
        assert!(screen.contains("1/3"));
    }

    #[test]
    fn test_case_info_renders_case_fields() {
        let mut app = filled_app();
        assert!(app.form.advance());
        let screen = render(&app);
        assert!(screen.contains("2024"));
        assert!(screen.contains("12345"));
        assert!(screen.contains("2/3"));
    }

    #[test]
    fn test_confirm_renders_error_and_contact() {
        let mut app = filled_app();
        assert!(app.form.advance());
        assert!(app.form.advance());
        app.form.set_agreed(true);
        app.form.begin_submission();
        app.form.complete_submission(Err(crate::repository::RepositoryError::Server {
            status: 500,
            body: String::new(),
        }));

        let screen = render(&app);
        assert!(screen.contains("[x]"));
        assert!(screen.contains("010-9999-0000"));
        assert!(screen.contains(crate::platform::SUBMIT_SHORTCUT));
    }

    #[tokio::test]
    async fn test_success_screen_renders_broker_phone() {
        let mut repo = MockLeadRepository::new();
        repo.expect_insert().returning(|_| Ok(()));

        let mut app = filled_app();
        assert!(app.form.advance());
        assert!(app.form.advance());
        app.form.set_agreed(true);
        app.form.submit(&repo).await;
        assert!(app.form.is_submitted());

        let screen = render(&app);
        assert!(screen.contains("010-9999-0000"));
    }
}
