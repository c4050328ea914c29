//! Tab 1 — Weather: city input plus the current lookup state.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use deskmate_core::ModuleState;

use crate::app::AppState;
use crate::theme;
use crate::ui;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let w = &app.weather;
    let editing = !w.lifecycle.is_loading();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("City: ", theme::muted()),
        Span::styled(w.city_input.as_str(), theme::accent_bold()),
        Span::styled(if editing { "_" } else { "" }, theme::accent()),
    ]));
    lines.push(Line::from(Span::styled("[Enter]look up", theme::muted())));
    lines.push(Line::from(""));

    match w.lifecycle.state() {
        ModuleState::Idle => {
            lines.push(Line::from(Span::styled(
                "Type a city and press Enter.",
                theme::muted(),
            )));
        }
        ModuleState::Loading => {
            lines.push(Line::from(vec![
                Span::styled(ui::spinner_frame(app.spinner_frame), theme::accent()),
                Span::styled(" Fetching weather...", theme::muted()),
            ]));
        }
        ModuleState::Error(message) => {
            lines.push(Line::from(Span::styled(
                message.as_str(),
                theme::negative(),
            )));
        }
        ModuleState::Success(reading) => {
            field_line(&mut lines, "Temperature", &reading.temperature);
            field_line(&mut lines, "Condition", &reading.condition);
            field_line(&mut lines, "Wind", &reading.wind);
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn field_line<'a>(lines: &mut Vec<Line<'a>>, label: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:>12}: "), theme::muted()),
        Span::styled(value.to_string(), theme::positive()),
    ]));
}
