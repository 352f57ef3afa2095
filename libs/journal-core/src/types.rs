//! Core types for the journaling application.
//!
//! All `date` fields are RFC 3339 UTC timestamps as stored in the database;
//! the frontend parses them for display.

use serde::{Deserialize, Serialize};

/// An evening reflection entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reflection {
    pub id: i64,
    pub prompt: String,
    pub answer: String,
    pub date: String,
}

/// A free-form gratitude entry. Any number may exist per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gratitude {
    pub id: i64,
    pub content: String,
    pub date: String,
}

/// A quote surfaced to the user (daily quote response).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// A quote the user bookmarked. Uniqueness of the `(text, author)` pair is
/// an application-level existence check, not a database constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQuote {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub date: String,
}

/// One item of the morning routine checklist. Ordering is the ascending
/// row id; ids are reissued whenever the checklist is restructured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineItem {
    pub id: i64,
    pub label: String,
    pub checked: bool,
}
