//! Deskmate Core — the behavioral core of the three-utility dashboard.
//!
//! This crate contains everything that can be exercised without a terminal:
//! - Domain types (weather readings, currencies, conversions, quotes)
//! - The simulated service layer with its exact failure contracts
//! - The module lifecycle state machine (Idle/Loading/Success/Error)
//! - Clock and RNG seams so timing and randomness are deterministic in tests

pub mod clock;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod rng;
pub mod services;

pub use error::ServiceError;
pub use lifecycle::{Lifecycle, ModuleState, Phase, RequestToken};
