//! Typed settings schema.
//!
//! Every recognized key declares whether it holds a toggle or a small
//! integer index, so a stored `0` or `1` is never reinterpreted across
//! kinds. The database column itself is a plain integer; encoding and
//! decoding always go through the key's declared kind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recognized setting keys. Serialized with the storage spelling so the
/// frontend and the settings table agree on names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKey {
    #[serde(rename = "setting_dailyQuote")]
    DailyQuote,
    #[serde(rename = "setting_morningRoutine")]
    MorningRoutine,
    #[serde(rename = "setting_eveningReflection")]
    EveningReflection,
    #[serde(rename = "setting_dailyGratitude")]
    DailyGratitude,
    #[serde(rename = "setting_primaryColorIndex")]
    PrimaryColorIndex,
}

impl SettingKey {
    /// All recognized keys, in display order.
    pub const ALL: [SettingKey; 5] = [
        SettingKey::DailyQuote,
        SettingKey::MorningRoutine,
        SettingKey::EveningReflection,
        SettingKey::DailyGratitude,
        SettingKey::PrimaryColorIndex,
    ];

    /// The key as stored in the settings table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DailyQuote => "setting_dailyQuote",
            Self::MorningRoutine => "setting_morningRoutine",
            Self::EveningReflection => "setting_eveningReflection",
            Self::DailyGratitude => "setting_dailyGratitude",
            Self::PrimaryColorIndex => "setting_primaryColorIndex",
        }
    }

    /// Parse a stored key. Unknown keys yield `None` and are skipped by
    /// the overlay, which lets old databases carry rows this version no
    /// longer recognizes.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "setting_dailyQuote" => Some(Self::DailyQuote),
            "setting_morningRoutine" => Some(Self::MorningRoutine),
            "setting_eveningReflection" => Some(Self::EveningReflection),
            "setting_dailyGratitude" => Some(Self::DailyGratitude),
            "setting_primaryColorIndex" => Some(Self::PrimaryColorIndex),
            _ => None,
        }
    }

    /// The kind of value this key holds.
    pub fn kind(self) -> SettingKind {
        match self {
            Self::PrimaryColorIndex => SettingKind::Index,
            _ => SettingKind::Toggle,
        }
    }

    /// Decode a raw stored integer according to this key's kind.
    pub fn decode(self, raw: i64) -> SettingValue {
        match self.kind() {
            SettingKind::Toggle => SettingValue::Toggle(raw != 0),
            SettingKind::Index => SettingValue::Index(raw.max(0) as u32),
        }
    }

    /// Validate that `value` matches this key's kind and encode it for
    /// storage.
    pub fn encode_checked(self, value: SettingValue) -> Result<i64, SettingTypeError> {
        if value.kind() == self.kind() {
            Ok(value.encode())
        } else {
            Err(SettingTypeError {
                key: self.as_str(),
                expected: self.kind(),
                got: value.kind(),
            })
        }
    }
}

/// What a setting value is: an on/off toggle or a small integer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Toggle,
    Index,
}

impl std::fmt::Display for SettingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toggle => f.write_str("toggle"),
            Self::Index => f.write_str("index"),
        }
    }
}

/// A typed setting value. Untagged on the wire: booleans deserialize as
/// toggles, numbers as indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Toggle(bool),
    Index(u32),
}

impl SettingValue {
    pub fn kind(self) -> SettingKind {
        match self {
            Self::Toggle(_) => SettingKind::Toggle,
            Self::Index(_) => SettingKind::Index,
        }
    }

    /// Storage encoding: toggles as 0/1, indexes as-is.
    pub fn encode(self) -> i64 {
        match self {
            Self::Toggle(v) => v as i64,
            Self::Index(i) => i as i64,
        }
    }
}

/// A value of the wrong kind was supplied for a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("setting {key} holds a {expected} value, got a {got}")]
pub struct SettingTypeError {
    pub key: &'static str,
    pub expected: SettingKind,
    pub got: SettingKind,
}

/// The full settings snapshot returned to the frontend. Defaults apply to
/// any key absent from the settings table, so adding a recognized key never
/// requires migrating old rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub show_daily_quote: bool,
    pub show_morning_routine: bool,
    pub show_evening_reflection: bool,
    pub show_daily_gratitude: bool,
    pub primary_color_index: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_daily_quote: true,
            show_morning_routine: true,
            show_evening_reflection: true,
            show_daily_gratitude: true,
            primary_color_index: 0,
        }
    }
}

impl AppSettings {
    /// Overlay one stored row onto the snapshot.
    pub fn apply(&mut self, key: SettingKey, raw: i64) {
        match (key, key.decode(raw)) {
            (SettingKey::DailyQuote, SettingValue::Toggle(v)) => self.show_daily_quote = v,
            (SettingKey::MorningRoutine, SettingValue::Toggle(v)) => self.show_morning_routine = v,
            (SettingKey::EveningReflection, SettingValue::Toggle(v)) => {
                self.show_evening_reflection = v
            }
            (SettingKey::DailyGratitude, SettingValue::Toggle(v)) => self.show_daily_gratitude = v,
            (SettingKey::PrimaryColorIndex, SettingValue::Index(i)) => {
                self.primary_color_index = i
            }
            // decode() is keyed on the key's kind, so mixed pairs cannot occur
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn key_round_trip() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SettingKey::parse("setting_unknown"), None);
    }

    #[test]
    fn decode_respects_kind() {
        // A stored 1 is a toggle for toggle keys and an index for the
        // palette key; the two are never conflated.
        assert_eq!(
            SettingKey::DailyQuote.decode(1),
            SettingValue::Toggle(true)
        );
        assert_eq!(
            SettingKey::PrimaryColorIndex.decode(1),
            SettingValue::Index(1)
        );
        assert_eq!(
            SettingKey::PrimaryColorIndex.decode(0),
            SettingValue::Index(0)
        );
    }

    #[test]
    fn decode_clamps_negative_index() {
        assert_eq!(
            SettingKey::PrimaryColorIndex.decode(-3),
            SettingValue::Index(0)
        );
    }

    #[test]
    fn encode_checked_rejects_kind_mismatch() {
        let err = SettingKey::PrimaryColorIndex
            .encode_checked(SettingValue::Toggle(true))
            .unwrap_err();
        assert_eq!(err.expected, SettingKind::Index);
        assert_eq!(err.got, SettingKind::Toggle);

        assert_eq!(
            SettingKey::DailyQuote.encode_checked(SettingValue::Toggle(false)),
            Ok(0)
        );
        assert_eq!(
            SettingKey::PrimaryColorIndex.encode_checked(SettingValue::Index(4)),
            Ok(4)
        );
    }

    #[test]
    fn defaults_are_all_on_with_first_palette() {
        let settings = AppSettings::default();
        assert!(settings.show_daily_quote);
        assert!(settings.show_morning_routine);
        assert!(settings.show_evening_reflection);
        assert!(settings.show_daily_gratitude);
        assert_eq!(settings.primary_color_index, 0);
    }

    #[test]
    fn apply_overlays_stored_rows() {
        let mut settings = AppSettings::default();
        settings.apply(SettingKey::EveningReflection, 0);
        settings.apply(SettingKey::PrimaryColorIndex, 3);
        assert!(!settings.show_evening_reflection);
        assert_eq!(settings.primary_color_index, 3);
        // untouched keys keep their defaults
        assert!(settings.show_daily_quote);
    }

    #[test]
    fn setting_value_wire_format() {
        let toggle: SettingValue = serde_json::from_str("false").unwrap();
        assert_eq!(toggle, SettingValue::Toggle(false));
        let index: SettingValue = serde_json::from_str("2").unwrap();
        assert_eq!(index, SettingValue::Index(2));
    }
}
