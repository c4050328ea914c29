//! Keyboard input dispatch — overlays first, then global keys, then the
//! active tab.
//!
//! Plain characters belong to the text inputs, so the global chords avoid
//! them: Tab/BackTab switch tabs, `?` opens help, Esc quits. While a module
//! is loading its inputs are disabled and tab-local keys are ignored.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Tab};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            handle_help_overlay(app, key);
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            app.active_tab = app.active_tab.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_tab = app.active_tab.prev();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Tab-specific keys.
    match app.active_tab {
        Tab::Weather => handle_weather_key(app, key),
        Tab::Converter => handle_converter_key(app, key, now),
        Tab::Quote => handle_quote_key(app, key),
    }
}

/// Key bindings shown in the help overlay.
pub fn key_bindings() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Tab / Shift+Tab", "Switch tab"),
        ("Esc / Ctrl+C", "Quit"),
        ("?", "This help"),
        ("e (in help)", "Error history"),
        ("Enter (Weather)", "Look up city"),
        ("Enter (Converter)", "Convert now"),
        ("←/→ (Converter)", "Toggle USD/EUR"),
        ("Enter or n (Quotes)", "New quote"),
    ]
}

fn handle_help_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
        }
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_weather_key(app: &mut AppState, key: KeyEvent) {
    // Inputs are disabled while a lookup is in flight.
    if app.weather.lifecycle.is_loading() {
        return;
    }
    match key.code {
        KeyCode::Enter => app.submit_weather(),
        KeyCode::Backspace => {
            app.weather.city_input.pop();
        }
        KeyCode::Char(c) => app.weather.city_input.push(c),
        _ => {}
    }
}

fn handle_converter_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    if app.converter.lifecycle.is_loading() {
        return;
    }
    match key.code {
        KeyCode::Enter => app.submit_conversion(),
        KeyCode::Left | KeyCode::Right => {
            app.converter.target = app.converter.target.toggled();
            app.converter.note_edited(now);
        }
        KeyCode::Backspace => {
            app.converter.amount_input.pop();
            app.converter.note_edited(now);
        }
        KeyCode::Char(c) => {
            // Anything is accepted here; the service validates and the
            // invalid-amount banner is part of the contract.
            app.converter.amount_input.push(c);
            app.converter.note_edited(now);
        }
        _ => {}
    }
}

fn handle_quote_key(app: &mut AppState, key: KeyEvent) {
    if app.quote.lifecycle.is_loading() {
        return;
    }
    if let KeyCode::Enter | KeyCode::Char('n') = key.code {
        app.request_quote();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use deskmate_core::domain::Currency;
    use deskmate_core::rng::SeedTree;

    use crate::settings::Settings;
    use crate::worker::WorkerCommand;

    fn test_app() -> (AppState, mpsc::Receiver<WorkerCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        let settings = Settings {
            quote_fault_rate: 0.0,
            ..Settings::default()
        };
        let app = AppState::new(cmd_tx, resp_rx, &settings, &SeedTree::new(42));
        (app, cmd_rx)
    }

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::from(code), Instant::now());
    }

    #[test]
    fn typing_builds_the_city_input() {
        let (mut app, _cmd_rx) = test_app();
        app.weather.city_input.clear();

        for c in "Pune".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.weather.city_input, "Pune");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.weather.city_input, "Pun");
    }

    #[test]
    fn enter_submits_the_weather_lookup() {
        let (mut app, cmd_rx) = test_app();
        press(&mut app, KeyCode::Enter);

        assert!(app.weather.lifecycle.is_loading());
        assert!(matches!(
            cmd_rx.try_recv().unwrap(),
            WorkerCommand::FetchWeather { .. }
        ));
    }

    #[test]
    fn inputs_are_disabled_while_loading() {
        let (mut app, cmd_rx) = test_app();
        press(&mut app, KeyCode::Enter);
        let _ = cmd_rx.try_recv();

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.weather.city_input, "Hyderabad");
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn arrow_keys_toggle_the_currency_and_arm_the_debounce() {
        let (mut app, _cmd_rx) = test_app();
        app.active_tab = Tab::Converter;
        app.converter.amount_input = "100".into();

        press(&mut app, KeyCode::Right);
        assert_eq!(app.converter.target, Currency::Eur);
        assert!(app.converter.debounce_due.is_some());

        press(&mut app, KeyCode::Left);
        assert_eq!(app.converter.target, Currency::Usd);
    }

    #[test]
    fn currency_change_without_an_amount_stays_disarmed() {
        let (mut app, _cmd_rx) = test_app();
        app.active_tab = Tab::Converter;

        press(&mut app, KeyCode::Right);
        assert!(app.converter.debounce_due.is_none());
    }

    #[test]
    fn quote_keys_request_a_quote() {
        let (mut app, cmd_rx) = test_app();
        app.active_tab = Tab::Quote;

        press(&mut app, KeyCode::Char('n'));
        assert!(matches!(
            cmd_rx.try_recv().unwrap(),
            WorkerCommand::FetchQuote { .. }
        ));
    }

    #[test]
    fn tab_keys_cycle_tabs() {
        let (mut app, _cmd_rx) = test_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Converter);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, Tab::Weather);
    }

    #[test]
    fn tab_switching_preserves_hidden_module_state() {
        let (mut app, _cmd_rx) = test_app();
        app.active_tab = Tab::Converter;
        app.converter.amount_input = "250".into();

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Converter);
        assert_eq!(app.converter.amount_input, "250");
    }

    #[test]
    fn help_overlay_opens_and_reaches_error_history() {
        let (mut app, _cmd_rx) = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::Help);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.overlay, Overlay::ErrorHistory);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn esc_quits_when_no_overlay_is_open() {
        let (mut app, _cmd_rx) = test_app();
        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn key_bindings_list_is_populated() {
        let bindings = key_bindings();
        assert!(!bindings.is_empty());
        assert_eq!(bindings[0].0, "Tab / Shift+Tab");
    }
}
