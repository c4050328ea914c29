//! Quote service.

use rand::Rng;

use crate::domain::{Quote, QUOTES};

/// Draw a quote uniformly from the fixed set. Never fails — the fault the
/// quote module can surface is injected client-side, before this is called.
pub fn random_quote(rng: &mut impl Rng) -> Quote {
    QUOTES[rng.gen_range(0..QUOTES.len())]
}
