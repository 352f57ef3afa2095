//! Content bundled with the application: the quote corpus and the evening
//! reflection prompt pool.

/// A quote from the bundled corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledQuote {
    pub text: &'static str,
    pub author: &'static str,
}

/// Quote corpus for the daily quote.
pub const QUOTES: &[BundledQuote] = &[
    BundledQuote {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    BundledQuote {
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    BundledQuote {
        text: "Your time is limited, so don't waste it living someone else's life.",
        author: "Steve Jobs",
    },
    BundledQuote {
        text: "The best way to predict the future is to invent it.",
        author: "Alan Kay",
    },
    BundledQuote {
        text: "It does not matter how slowly you go as long as you do not stop.",
        author: "Confucius",
    },
    BundledQuote {
        text: "Happiness is not something ready made. It comes from your own actions.",
        author: "Dalai Lama",
    },
    BundledQuote {
        text: "Everything you can imagine is real.",
        author: "Pablo Picasso",
    },
];

/// Candidate pool for the evening reflection prompt.
pub const REFLECTION_PROMPTS: &[&str] = &[
    "What made you smile today?",
    "What is one thing you learned today?",
    "How did you take care of yourself today?",
    "What are you grateful for right now?",
    "What was the most challenging part of your day, and how did you handle it?",
];
