//! The fixed quote set.

use serde::Serialize;

/// A motivational quote. The set is literal and closed — the service only
/// ever hands out elements of [`QUOTES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

/// The five quotes the service draws from. The first doubles as the default
/// shown before any interaction.
pub const QUOTES: [Quote; 5] = [
    Quote {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        author: "Winston Churchill",
    },
    Quote {
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    Quote {
        text: "It always seems impossible until it is done.",
        author: "Nelson Mandela",
    },
    Quote {
        text: "Don't watch the clock; do what it does. Keep going.",
        author: "Sam Levenson",
    },
];

impl Quote {
    /// The quote a fresh session shows before the user asks for one.
    pub fn initial() -> Quote {
        QUOTES[0]
    }
}
