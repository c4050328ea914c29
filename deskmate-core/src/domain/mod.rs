//! Domain value types shared by the service layer and the TUI.

pub mod money;
pub mod quote;
pub mod weather;

pub use money::{Conversion, Currency};
pub use quote::{Quote, QUOTES};
pub use weather::WeatherReading;
