//! Tab 2 — Converter: INR amount input, target toggle, conversion state.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use deskmate_core::domain::Currency;
use deskmate_core::ModuleState;

use crate::app::AppState;
use crate::theme;
use crate::ui;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let c = &app.converter;
    let editing = !c.lifecycle.is_loading();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Amount (INR): ", theme::muted()),
        Span::styled(c.amount_input.as_str(), theme::accent_bold()),
        Span::styled(if editing { "_" } else { "" }, theme::accent()),
    ]));

    let mut currency_spans: Vec<Span> = vec![Span::styled("Target: ", theme::muted())];
    for currency in Currency::ALL {
        let style = if currency == c.target {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        currency_spans.push(Span::styled(format!(" {} ", currency.code()), style));
    }
    lines.push(Line::from(currency_spans));

    lines.push(Line::from(Span::styled(
        "[Enter]convert [Left/Right]currency  auto-converts after a pause",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    match c.lifecycle.state() {
        ModuleState::Idle => {
            lines.push(Line::from(Span::styled(
                "Enter an amount to convert.",
                theme::muted(),
            )));
        }
        ModuleState::Loading => {
            lines.push(Line::from(vec![
                Span::styled(ui::spinner_frame(app.spinner_frame), theme::accent()),
                Span::styled(" Converting...", theme::muted()),
            ]));
        }
        ModuleState::Error(message) => {
            lines.push(Line::from(Span::styled(
                message.as_str(),
                theme::negative(),
            )));
        }
        ModuleState::Success(conversion) => {
            field_line(
                &mut lines,
                "Amount",
                &format!("{:.2} INR", conversion.original_amount),
            );
            field_line(&mut lines, "Rate", &conversion.rate.to_string());
            field_line(
                &mut lines,
                "Converted",
                &format!("{} {}", conversion.result, conversion.target.code()),
            );
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn field_line<'a>(lines: &mut Vec<Line<'a>>, label: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:>10}: "), theme::muted()),
        Span::styled(value.to_string(), theme::positive()),
    ]));
}
