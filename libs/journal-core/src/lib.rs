//! Core journal library shared by the Mindwell app crates.
//!
//! Provides:
//! - Shared entry types (Reflection, Gratitude, SavedQuote, RoutineItem)
//! - The typed settings schema (SettingKey, SettingValue, AppSettings)
//! - Built-in content pools (quote corpus, reflection prompts)

pub mod content;
pub mod settings;
pub mod types;

pub use content::{BundledQuote, QUOTES, REFLECTION_PROMPTS};
pub use settings::{AppSettings, SettingKey, SettingKind, SettingTypeError, SettingValue};
pub use types::{Gratitude, Quote, Reflection, RoutineItem, SavedQuote};
