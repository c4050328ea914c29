//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels;
//! responses are folded back in through [`AppState::handle_response`], where
//! each module's lifecycle decides whether the response is still current.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::Rng;

use deskmate_core::domain::{Conversion, Currency, Quote, WeatherReading};
use deskmate_core::rng::SeedTree;
use deskmate_core::{Lifecycle, ServiceError};

use crate::settings::Settings;
use crate::worker::{WorkerCommand, WorkerResponse};

/// Quiet period before an edited converter input auto-fires.
pub const CONVERT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Weather,
    Converter,
    Quote,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Tab::Weather => 0,
            Tab::Converter => 1,
            Tab::Quote => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Tab::Weather),
            1 => Some(Tab::Converter),
            2 => Some(Tab::Quote),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Weather => "Weather",
            Tab::Converter => "Converter",
            Tab::Quote => "Quotes",
        }
    }

    pub fn next(self) -> Tab {
        Tab::from_index((self.index() + 1) % 3).unwrap()
    }

    pub fn prev(self) -> Tab {
        Tab::from_index((self.index() + 2) % 3).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub source: Tab,
    pub message: String,
}

/// Weather tab state.
#[derive(Debug)]
pub struct WeatherPanelState {
    pub city_input: String,
    pub lifecycle: Lifecycle<WeatherReading>,
}

impl WeatherPanelState {
    pub fn new() -> Self {
        Self {
            // Pre-filled so the startup auto-fire queries the default city.
            city_input: "Hyderabad".into(),
            lifecycle: Lifecycle::new(),
        }
    }
}

/// Converter tab state.
#[derive(Debug)]
pub struct ConverterPanelState {
    pub amount_input: String,
    pub target: Currency,
    pub lifecycle: Lifecycle<Conversion>,
    pub debounce_due: Option<Instant>,
}

impl ConverterPanelState {
    pub fn new() -> Self {
        Self {
            amount_input: String::new(),
            target: Currency::Usd,
            lifecycle: Lifecycle::new(),
            debounce_due: None,
        }
    }

    /// Arm (or re-arm) the auto-convert deadline after an edit. Editing the
    /// amount away entirely disarms it: auto-convert only runs while an
    /// amount is present.
    pub fn note_edited(&mut self, now: Instant) {
        if self.amount_input.trim().is_empty() {
            self.debounce_due = None;
        } else {
            self.debounce_due = Some(now + CONVERT_DEBOUNCE);
        }
    }

    /// True once the quiet period has elapsed; clears the deadline.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.debounce_due {
            Some(due) if now >= due => {
                self.debounce_due = None;
                true
            }
            _ => false,
        }
    }
}

/// Quote tab state.
#[derive(Debug)]
pub struct QuotePanelState {
    pub lifecycle: Lifecycle<Quote>,
}

impl QuotePanelState {
    pub fn new() -> Self {
        Self {
            // A default quote is visible before any interaction.
            lifecycle: Lifecycle::with_initial(Quote::initial()),
        }
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_tab: Tab,
    pub running: bool,

    // Tab states — all three stay live; switching tabs only changes which
    // one is drawn.
    pub weather: WeatherPanelState,
    pub converter: ConverterPanelState,
    pub quote: QuotePanelState,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub spinner_frame: usize,

    // Quote fault injection, seeded so tests can force both branches.
    quote_fault_rate: f64,
    quote_gate: StdRng,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        settings: &Settings,
        seeds: &SeedTree,
    ) -> Self {
        Self {
            active_tab: Tab::Weather,
            running: true,
            weather: WeatherPanelState::new(),
            converter: ConverterPanelState::new(),
            quote: QuotePanelState::new(),
            worker_tx,
            worker_rx,
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::None,
            spinner_frame: 0,
            quote_fault_rate: settings.quote_fault_rate,
            quote_gate: seeds.rng_for("quote-gate", 0),
        }
    }

    /// Dispatch a weather lookup for the current input. Whitespace-only
    /// input never triggers a call.
    pub fn submit_weather(&mut self) {
        let city = self.weather.city_input.trim().to_string();
        if city.is_empty() {
            self.set_warning("Enter a city name first");
            return;
        }
        let token = self.weather.lifecycle.begin();
        let _ = self
            .worker_tx
            .send(WorkerCommand::FetchWeather { city, token });
    }

    /// Dispatch a conversion for the current amount and target. Fires on
    /// explicit submit and from the debounce tick; either way any pending
    /// auto-fire is disarmed first.
    pub fn submit_conversion(&mut self) {
        self.converter.debounce_due = None;
        let amount = self.converter.amount_input.clone();
        let target_code = self.converter.target.code().to_string();
        let token = self.converter.lifecycle.begin();
        let _ = self.worker_tx.send(WorkerCommand::Convert {
            amount,
            target_code,
            token,
        });
    }

    /// Trigger a quote fetch. The fault gate runs first and can fail the
    /// request without the service ever being called.
    pub fn request_quote(&mut self) {
        let token = self.quote.lifecycle.begin();
        if self.quote_gate.gen::<f64>() < self.quote_fault_rate {
            let message = ServiceError::QuoteUnavailable.to_string();
            self.quote.lifecycle.reject(token, message.clone());
            self.push_error(Tab::Quote, message);
            return;
        }
        let _ = self.worker_tx.send(WorkerCommand::FetchQuote { token });
    }

    /// Fold one worker response into the owning module's lifecycle. Stale
    /// responses are dropped by the lifecycle itself.
    pub fn handle_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::Weather { token, outcome } => match outcome {
                Ok(reading) => {
                    if self.weather.lifecycle.resolve(token, reading) {
                        self.set_status("Weather updated");
                    }
                }
                Err(message) => {
                    if self.weather.lifecycle.reject(token, message.clone()) {
                        self.push_error(Tab::Weather, message);
                    }
                }
            },
            WorkerResponse::Conversion { token, outcome } => match outcome {
                Ok(conversion) => {
                    if self.converter.lifecycle.resolve(token, conversion) {
                        self.set_status("Converted");
                    }
                }
                Err(message) => {
                    if self.converter.lifecycle.reject(token, message.clone()) {
                        self.push_error(Tab::Converter, message);
                    }
                }
            },
            WorkerResponse::Quote { token, quote } => {
                if self.quote.lifecycle.resolve(token, quote) {
                    self.set_status("New quote");
                }
            }
        }
    }

    /// One event-loop tick: animate the spinner and fire a due converter
    /// auto-submit.
    pub fn tick(&mut self, now: Instant) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        if self.converter.take_due(now) {
            self.submit_conversion();
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, source: Tab, message: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            source,
            message: message.clone(),
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
