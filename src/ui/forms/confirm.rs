//! Step 3: summary, disclaimer, privacy consent, and submit

use super::step_frame::{draw_step_buttons, draw_step_frame, split_buttons};
use crate::app::App;
use crate::state::Step;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const DISCLAIMER: &str = "본 분석은 1차 요약 데이터로 법적 효력이 없으며, 최종 입찰 전 반드시 대면 상담을 진행해야 합니다.";
const CONSENT_LABEL: &str = "개인정보 수집 및 이용에 동의합니다.";
const CONSENT_DETAIL: &str =
    "수집 항목: 이름, 연락처 | 목적: 경매 물건 분석 및 결과 안내 | 보유: 서비스 완료 후 1년";

/// Label/value pairs for the summary box; optional values only when filled in
fn summary_rows(app: &App) -> Vec<(&'static str, String)> {
    let draft = app.form.draft();
    let mut rows = vec![
        ("이름", draft.name.clone()),
        ("연락처", draft.phone.clone()),
        ("사건번호", draft.full_case_number()),
    ];
    if !draft.property_number.is_empty() {
        rows.push(("물건번호", draft.property_number.clone()));
    }
    if !draft.inquiry.is_empty() {
        rows.push(("문의사항", draft.inquiry.clone()));
    }
    rows
}

pub fn draw_confirm(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let content = draw_step_frame(frame, area, Step::ConfirmAndSubmit);
    let (body_area, buttons_area) = split_buttons(content);

    let rows = summary_rows(app);
    let summary_height = rows.len() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary_height), // Summary
            Constraint::Length(4),              // Disclaimer
            Constraint::Length(2),              // Consent
            Constraint::Min(0),                 // Error / spacing
            Constraint::Length(1),              // Contact line
        ])
        .split(body_area);

    draw_summary(frame, chunks[0], rows);
    draw_disclaimer(frame, chunks[1]);
    draw_consent(frame, chunks[2], form.draft().agreed_to_policy);

    if let Some(message) = form.last_error() {
        let error = Paragraph::new(Span::styled(
            message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(error, chunks[3]);
    }

    if app.broker.has_phone() {
        let contact = Paragraph::new(Line::from(vec![
            Span::styled("문의: ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.broker.phone.as_str(), Style::default().fg(Color::Cyan)),
        ]));
        frame.render_widget(contact, chunks[4]);
    }

    let submit_label = if app.is_submitting() {
        "제출 중..."
    } else {
        "의뢰 접수하기 ✓"
    };
    draw_step_buttons(
        frame,
        buttons_area,
        Some("← 이전"),
        submit_label,
        form.can_submit() && !app.is_submitting(),
    );
}

fn draw_summary(frame: &mut Frame, area: Rect, rows: Vec<(&'static str, String)>) {
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<8}"), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    value.replace('\n', " "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(summary, area);
}

fn draw_disclaimer(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "⚠ 안내 사항",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(DISCLAIMER, Style::default().fg(Color::Yellow))),
    ];
    let disclaimer = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(disclaimer, area);
}

fn draw_consent(frame: &mut Frame, area: Rect, agreed: bool) {
    let checkbox = if agreed { "[x] " } else { "[ ] " };
    let text = vec![
        Line::from(vec![
            Span::styled(checkbox, Style::default().fg(Color::Cyan)),
            Span::styled(CONSENT_LABEL, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("  (Space)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("    {CONSENT_DETAIL}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text), area);
}
