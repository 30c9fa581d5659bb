//! Step 1: name and phone number

use super::field_renderer::draw_field;
use super::step_frame::{draw_step_buttons, draw_step_frame, split_buttons};
use crate::app::App;
use crate::state::{FieldId, Step};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub fn draw_basic_info(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let content = draw_step_frame(frame, area, Step::BasicInfo);
    let (fields_area, buttons_area) = split_buttons(content);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(1),
            Constraint::Length(3), // Phone
            Constraint::Min(0),
        ])
        .split(fields_area);

    for (field, chunk) in [(FieldId::Name, chunks[0]), (FieldId::Phone, chunks[2])] {
        draw_field(
            frame,
            chunk,
            field,
            form.field(field),
            form.active_field() == Some(field),
        );
    }

    draw_step_buttons(
        frame,
        buttons_area,
        None,
        "다음 단계 →",
        form.can_advance(),
    );
}
