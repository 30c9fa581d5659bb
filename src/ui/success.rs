//! Terminal success screen shown once the lead has been stored

use crate::app::App;
use crate::ui::components::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const SUCCESS_MESSAGE: &str = "전문가가 권리분석 후 입력하신 연락처로 빠르게 안내해 드리겠습니다.\n\n※ 분석 결과 발송까지 통상 수분~수십분이 소요될 수 있습니다.";
const FOOTER: &str = "본 서비스는 법적 조언이 아닌 정보 제공 목적입니다";

pub fn draw(frame: &mut Frame, app: &App) {
    let mut hint = Vec::new();

    if app.broker.has_phone() {
        hint.push(Line::from(vec![
            Span::raw(format!("📞 {}에게 직접 전화하기: ", app.broker.name)),
            Span::styled(
                app.broker.phone.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        hint.push(Line::from(""));
    }

    hint.push(Line::from(Span::styled(
        FOOTER,
        Style::default().fg(Color::DarkGray),
    )));

    render_dialog(
        frame,
        DialogConfig {
            title: "✅ 의뢰가 접수되었습니다!",
            title_color: Color::Green,
            border_color: Color::Green,
            message: SUCCESS_MESSAGE,
            hint: Some(hint),
            max_width: 72,
        },
    );
}
