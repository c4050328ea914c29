//! Deskmate TUI — three-tab terminal dashboard over a simulated backend.
//!
//! Tabs:
//! 1. Weather — free-text city lookup, auto-fired once on startup
//! 2. Converter — INR amount to USD/EUR, debounced auto-convert
//! 3. Quotes — one-button quote fetch with a client-side fault gate

pub mod app;
pub mod input;
pub mod settings;
pub mod theme;
pub mod ui;
pub mod worker;
