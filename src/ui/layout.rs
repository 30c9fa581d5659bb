//! Layout components (header, step indicator, status bar)

use crate::app::App;
use crate::state::Step;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FORM_TITLE: &str = "경매 물건 분석 의뢰서";
const FORM_SUBTITLE: &str = "사건번호를 알려주시면 권리분석 결과를 빠르게 안내해 드립니다";

/// Areas of the main wizard screen
pub struct WizardLayout {
    pub header: Rect,
    pub indicator: Rect,
    pub content: Rect,
}

/// Split the screen into header, step indicator, and step content.
/// The bottom row is left for the status bar.
pub fn create_layout(area: Rect) -> WizardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Step indicator
            Constraint::Min(0),    // Step content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    WizardLayout {
        header: chunks[0],
        indicator: chunks[1],
        content: chunks[2],
    }
}

/// Draw the office name, form title, and subtitle
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            app.broker.office.as_str(),
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(Span::styled(
            FORM_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(FORM_SUBTITLE, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Marker and style for an input step relative to the current one
fn step_marker(step: Step, current: Step) -> (String, Style) {
    if current.number() > step.number() || current == Step::Submitted {
        ("✓".to_string(), Style::default().fg(Color::LightBlue))
    } else if current == step {
        (
            step.number().to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            step.number().to_string(),
            Style::default().fg(Color::DarkGray),
        )
    }
}

/// Draw `( 1 )──( 2 )──( 3 )` with labels underneath
pub fn draw_step_indicator(frame: &mut Frame, area: Rect, current: Step) {
    let mut markers = Vec::new();
    let mut labels = Vec::new();

    for (idx, step) in Step::INPUT_STEPS.iter().enumerate() {
        let (marker, style) = step_marker(*step, current);
        markers.push(Span::styled(format!(" {marker} "), style));

        let reached = current.number() >= step.number();
        let label_style = if reached {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        labels.push(Span::styled(step.label(), label_style));

        if idx + 1 < Step::INPUT_STEPS.len() {
            let connector_style = if current.number() > step.number() {
                Style::default().fg(Color::LightBlue)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            markers.push(Span::styled("────", connector_style));
            labels.push(Span::raw("   "));
        }
    }

    let indicator = Paragraph::new(vec![Line::from(markers), Line::from(labels)])
        .alignment(Alignment::Center);
    frame.render_widget(indicator, area);
}

/// Key hints for the current screen
fn get_step_hints(app: &App) -> String {
    match app.form.step() {
        Step::BasicInfo => format!(
            " Tab: 다음 칸  Enter: 다음 단계  {}: 붙여넣기  Esc: 종료",
            crate::platform::PASTE_SHORTCUT
        ),
        Step::CaseInfo => " Tab: 다음 칸  Enter: 다음 단계  Esc: 이전".to_string(),
        Step::ConfirmAndSubmit => format!(
            " Space: 동의  Enter/{}: 제출  Esc: 이전",
            crate::platform::SUBMIT_SHORTCUT
        ),
        Step::Submitted => " Enter: 종료".to_string(),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {}/3 ", app.form.step().number()),
        Style::default().fg(Color::Cyan),
    )];

    spans.push(Span::styled(
        get_step_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}
