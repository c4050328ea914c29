//! Tab 3 — Quotes: one action, one quote.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use deskmate_core::ModuleState;

use crate::app::AppState;
use crate::theme;
use crate::ui;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let q = &app.quote;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[Enter]new quote",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    match q.lifecycle.state() {
        ModuleState::Idle => {
            lines.push(Line::from(Span::styled(
                "Press Enter for a quote.",
                theme::muted(),
            )));
        }
        ModuleState::Loading => {
            lines.push(Line::from(vec![
                Span::styled(ui::spinner_frame(app.spinner_frame), theme::accent()),
                Span::styled(" Fetching quote...", theme::muted()),
            ]));
        }
        ModuleState::Error(message) => {
            lines.push(Line::from(Span::styled(
                message.as_str(),
                theme::negative(),
            )));
        }
        ModuleState::Success(quote) => {
            lines.push(Line::from(Span::styled(
                format!("\"{}\"", quote.text),
                theme::accent(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("    - {}", quote.author),
                theme::neutral(),
            )));
        }
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
