//! Step 2: court case number, property number, and free-form inquiry

use super::field_renderer::{draw_field, draw_help_text};
use super::step_frame::{draw_step_buttons, draw_step_frame, split_buttons};
use crate::app::App;
use crate::state::{FieldId, Step, CASE_NUMBER_INFIX};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CASE_NUMBER_HELP: &str = "입찰표 또는 법원 경매 공고에서 확인하실 수 있습니다";
const PROPERTY_NUMBER_HELP: &str = "같은 사건번호에 물건이 여러 개인 경우에만 입력하세요";

pub fn draw_case_info(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let content = draw_step_frame(frame, area, Step::CaseInfo);
    let (fields_area, buttons_area) = split_buttons(content);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Case number row
            Constraint::Length(1), // Case number help
            Constraint::Length(3), // Property number
            Constraint::Length(1), // Property number help
            Constraint::Min(4),    // Inquiry
        ])
        .split(fields_area);

    draw_case_number_row(frame, chunks[0], app);
    draw_help_text(frame, chunks[1], CASE_NUMBER_HELP);

    draw_field(
        frame,
        chunks[2],
        FieldId::PropertyNumber,
        form.field(FieldId::PropertyNumber),
        form.active_field() == Some(FieldId::PropertyNumber),
    );
    draw_help_text(frame, chunks[3], PROPERTY_NUMBER_HELP);

    draw_field(
        frame,
        chunks[4],
        FieldId::Inquiry,
        form.field(FieldId::Inquiry),
        form.active_field() == Some(FieldId::Inquiry),
    );

    draw_step_buttons(
        frame,
        buttons_area,
        Some("← 이전"),
        "다음 단계 →",
        form.can_advance(),
    );
}

/// Year box, fixed infix, sequence box: `[2024] 타경 [12345]`
fn draw_case_number_row(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Year
            Constraint::Length(8),  // Infix
            Constraint::Min(16),    // Sequence
        ])
        .split(area);

    draw_field(
        frame,
        chunks[0],
        FieldId::CaseYear,
        form.field(FieldId::CaseYear),
        form.active_field() == Some(FieldId::CaseYear),
    );

    let infix = Paragraph::new(CASE_NUMBER_INFIX)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(infix, chunks[1]);

    draw_field(
        frame,
        chunks[2],
        FieldId::CaseSequence,
        form.field(FieldId::CaseSequence),
        form.active_field() == Some(FieldId::CaseSequence),
    );
}
