//! Background worker thread — owns the simulated latency and service calls.
//!
//! Communication with the TUI main thread is via `mpsc` channels. Each
//! service command pauses the injected clock for the configured latency,
//! runs the pure service operation, and sends back a tokened response; the
//! lifecycle on the main thread decides whether that response is still
//! current.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use deskmate_core::clock::Clock;
use deskmate_core::domain::{Conversion, Quote, WeatherReading};
use deskmate_core::lifecycle::RequestToken;
use deskmate_core::rng::SeedTree;
use deskmate_core::services;

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    FetchWeather {
        city: String,
        token: RequestToken,
    },
    Convert {
        amount: String,
        target_code: String,
        token: RequestToken,
    },
    FetchQuote {
        token: RequestToken,
    },
    Shutdown,
}

/// Responses sent from the worker back to the TUI. Failures cross the
/// channel as display strings; the taxonomy stays inside the core crate.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    Weather {
        token: RequestToken,
        outcome: Result<WeatherReading, String>,
    },
    Conversion {
        token: RequestToken,
        outcome: Result<Conversion, String>,
    },
    Quote {
        token: RequestToken,
        quote: Quote,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    clock: Box<dyn Clock>,
    seeds: SeedTree,
    latency: Duration,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("deskmate-worker".into())
        .spawn(move || {
            worker_loop(rx, tx, clock, seeds, latency);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    clock: Box<dyn Clock>,
    seeds: SeedTree,
    latency: Duration,
) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(cmd) => handle_command(cmd, &tx, clock.as_ref(), &seeds, latency),
        }
    }
}

fn handle_command(
    cmd: WorkerCommand,
    tx: &Sender<WorkerResponse>,
    clock: &dyn Clock,
    seeds: &SeedTree,
    latency: Duration,
) {
    match cmd {
        WorkerCommand::FetchWeather { city, token } => {
            clock.pause(latency);
            let mut rng = seeds.rng_for("weather", token.value());
            let outcome = services::fetch_weather(&city, &mut rng).map_err(|e| e.to_string());
            let _ = tx.send(WorkerResponse::Weather { token, outcome });
        }
        WorkerCommand::Convert {
            amount,
            target_code,
            token,
        } => {
            clock.pause(latency);
            let outcome =
                services::convert_currency(&amount, &target_code).map_err(|e| e.to_string());
            let _ = tx.send(WorkerResponse::Conversion { token, outcome });
        }
        WorkerCommand::FetchQuote { token } => {
            clock.pause(latency);
            let mut rng = seeds.rng_for("quote", token.value());
            let quote = services::random_quote(&mut rng);
            let _ = tx.send(WorkerResponse::Quote { token, quote });
        }
        WorkerCommand::Shutdown => {} // handled in loop
    }
}
