//! Shared chrome for the wizard steps: bordered card and navigation buttons

use crate::state::Step;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the step card and return the area inside it, below the subtitle
pub fn draw_step_frame(frame: &mut Frame, area: Rect, step: Step) -> Rect {
    let block = Block::default()
        .title(Line::from(Span::styled(
            format!(" {} ", step.title()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Spacing
            Constraint::Min(0),    // Step content
        ])
        .horizontal_margin(1)
        .split(inner);

    let subtitle = Paragraph::new(Span::styled(
        step.subtitle(),
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(subtitle, chunks[0]);

    chunks[2]
}

/// Split off the bottom rows of `area` for navigation buttons
pub fn split_buttons(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the back/forward button row; the forward button is the primary action
pub fn draw_step_buttons(
    frame: &mut Frame,
    area: Rect,
    back_label: Option<&str>,
    forward_label: &str,
    forward_enabled: bool,
) {
    match back_label {
        Some(back) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
                .spacing(1)
                .split(area);
            render_button(frame, chunks[0], back, false, true);
            render_button(frame, chunks[1], forward_label, true, forward_enabled);
        }
        None => render_button(frame, area, forward_label, true, forward_enabled),
    }
}
