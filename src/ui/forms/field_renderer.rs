//! Field rendering utilities for forms

use crate::state::FieldId;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one input field with its label, placeholder, and cursor
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldId, value: &str, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect()
    };

    if is_active {
        if value.is_empty() {
            lines[0].spans.insert(0, cursor_span);
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
    }

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Block title: label plus a required marker or an optional tag
fn field_title(field: FieldId) -> Line<'static> {
    let marker = if field.is_required() {
        Span::styled("* ", Style::default().fg(Color::Red))
    } else {
        Span::styled("(선택) ", Style::default().fg(Color::DarkGray))
    };
    Line::from(vec![Span::raw(format!(" {} ", field.label())), marker])
}

/// Draw a dim helper line under a field
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        format!(" {text}"),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
