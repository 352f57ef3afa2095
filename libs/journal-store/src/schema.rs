//! SQLite schema definitions.

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for the local journal database. Every statement is
/// idempotent, so the batch runs on every launch.
pub const SCHEMA: &str = r#"
-- Evening reflections (one surfaced per day, history kept)
CREATE TABLE IF NOT EXISTS reflections (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    prompt TEXT NOT NULL,
    answer TEXT NOT NULL,
    date TEXT NOT NULL
);

-- Daily prompt cache, one row per calendar day
CREATE TABLE IF NOT EXISTS daily_prompts (
    date TEXT PRIMARY KEY,
    prompt TEXT NOT NULL
);

-- Gratitude log, unlimited entries per day
CREATE TABLE IF NOT EXISTS gratitudes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    date TEXT NOT NULL
);

-- Daily quote cache, one row per calendar day
CREATE TABLE IF NOT EXISTS daily_quotes (
    date TEXT PRIMARY KEY,
    text TEXT NOT NULL,
    author TEXT NOT NULL
);

-- Bookmarked quotes; (text, author) uniqueness is checked by the app
CREATE TABLE IF NOT EXISTS saved_quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    author TEXT NOT NULL,
    date TEXT NOT NULL
);

-- Morning routine checklist, ordered by ascending id
CREATE TABLE IF NOT EXISTS morning_routines (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    label TEXT NOT NULL,
    checked INTEGER NOT NULL DEFAULT 0
);

-- Key/value preferences (integer-encoded, typed per key in journal-core)
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value INTEGER NOT NULL
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_reflections_date ON reflections(date);
CREATE INDEX IF NOT EXISTS idx_gratitudes_date ON gratitudes(date);
CREATE INDEX IF NOT EXISTS idx_saved_quotes_pair ON saved_quotes(text, author);
"#;

/// Record the schema version if not present.
pub const INIT_SCHEMA_VERSION: &str = r#"
INSERT OR IGNORE INTO schema_version (version) VALUES (1);
"#;
