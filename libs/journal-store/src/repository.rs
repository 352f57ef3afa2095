//! Repository pattern for database access.

use crate::date_utils;
use crate::error::{is_constraint_violation, StoreError};
use journal_core::content::BundledQuote;
use journal_core::settings::{AppSettings, SettingKey, SettingValue};
use journal_core::types::{Gratitude, Quote, Reflection, RoutineItem, SavedQuote};
use rand::seq::SliceRandom;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

type Result<T> = std::result::Result<T, StoreError>;

/// Repository for the daily quote and quote bookmarks.
pub trait QuoteRepository {
    fn get_daily_quote(&self, pool: &[BundledQuote]) -> Result<Quote>;
    fn is_quote_saved(&self, text: &str, author: &str) -> Result<bool>;
    fn save_quote(&self, text: &str, author: &str) -> Result<()>;
    fn remove_saved_quote(&self, text: &str, author: &str) -> Result<()>;
    fn get_saved_quotes(&self) -> Result<Vec<SavedQuote>>;
}

/// Repository for evening reflections and the daily prompt.
pub trait ReflectionRepository {
    fn get_daily_prompt(&self, candidates: &[&str]) -> Result<String>;
    fn save_reflection(&self, prompt: &str, answer: &str) -> Result<()>;
    fn get_today_reflection(&self) -> Result<Option<Reflection>>;
    fn get_reflections(&self) -> Result<Vec<Reflection>>;
    fn delete_reflection(&self, id: i64) -> Result<()>;
}

/// Repository for gratitude entries.
pub trait GratitudeRepository {
    fn save_gratitude(&self, content: &str) -> Result<()>;
    fn update_gratitude(&self, id: i64, content: &str) -> Result<()>;
    fn delete_gratitude(&self, id: i64) -> Result<()>;
    fn get_today_gratitudes(&self) -> Result<Vec<Gratitude>>;
    fn get_gratitudes(&self) -> Result<Vec<Gratitude>>;
}

/// Repository for the morning routine checklist.
pub trait RoutineRepository {
    fn get_morning_routine_items(&self) -> Result<Vec<RoutineItem>>;
    fn sync_morning_routine_items(&self, items: &[RoutineItem]) -> Result<()>;
    fn update_morning_routine_item_status(&self, id: i64, checked: bool) -> Result<()>;
}

/// Repository for settings operations.
pub trait SettingsRepository {
    fn get_all_settings(&self) -> Result<AppSettings>;
    fn save_setting(&self, key: SettingKey, value: SettingValue) -> Result<()>;
}

/// SQLite implementation of the repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open the database at `path`, creating it and the schema if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_SCHEMA_VERSION)?;
        Ok(())
    }

    fn fetch_daily_quote(&self, day: &str) -> Result<Option<Quote>> {
        self.conn
            .query_row(
                "SELECT text, author FROM daily_quotes WHERE date = ?1",
                params![day],
                |row| {
                    Ok(Quote {
                        text: row.get(0)?,
                        author: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert the day's chosen quote, or return whatever another caller
    /// already committed for the same day.
    fn commit_daily_quote(&self, day: &str, text: &str, author: &str) -> Result<Quote> {
        let inserted = self.conn.execute(
            "INSERT INTO daily_quotes (date, text, author) VALUES (?1, ?2, ?3)",
            params![day, text, author],
        );
        match inserted {
            Ok(_) => Ok(Quote {
                text: text.to_string(),
                author: author.to_string(),
            }),
            Err(err) if is_constraint_violation(&err) => match self.fetch_daily_quote(day)? {
                Some(existing) => Ok(existing),
                // no row despite the conflict: a genuine storage fault
                None => Err(err.into()),
            },
            Err(err) => Err(err.into()),
        }
    }

    fn daily_quote_for_day(&self, day: &str, pool: &[BundledQuote]) -> Result<Quote> {
        if let Some(quote) = self.fetch_daily_quote(day)? {
            return Ok(quote);
        }
        let choice = pool
            .choose(&mut rand::thread_rng())
            .ok_or(StoreError::EmptyPool)?;
        self.commit_daily_quote(day, choice.text, choice.author)
    }

    fn fetch_daily_prompt(&self, day: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT prompt FROM daily_prompts WHERE date = ?1",
                params![day],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    fn commit_daily_prompt(&self, day: &str, choice: &str) -> Result<String> {
        let inserted = self.conn.execute(
            "INSERT INTO daily_prompts (date, prompt) VALUES (?1, ?2)",
            params![day, choice],
        );
        match inserted {
            Ok(_) => Ok(choice.to_string()),
            Err(err) if is_constraint_violation(&err) => match self.fetch_daily_prompt(day)? {
                Some(existing) => Ok(existing),
                None => Err(err.into()),
            },
            Err(err) => Err(err.into()),
        }
    }

    fn daily_prompt_for_day(&self, day: &str, candidates: &[&str]) -> Result<String> {
        if let Some(prompt) = self.fetch_daily_prompt(day)? {
            return Ok(prompt);
        }
        let choice = candidates
            .choose(&mut rand::thread_rng())
            .ok_or(StoreError::EmptyPool)?;
        self.commit_daily_prompt(day, choice)
    }

    fn reflection_in_bounds(&self, start: &str, end: &str) -> Result<Option<Reflection>> {
        self.conn
            .query_row(
                "SELECT id, prompt, answer, date FROM reflections
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date DESC LIMIT 1",
                params![start, end],
                Self::row_to_reflection,
            )
            .optional()
            .map_err(Into::into)
    }

    fn row_to_reflection(row: &rusqlite::Row) -> rusqlite::Result<Reflection> {
        Ok(Reflection {
            id: row.get(0)?,
            prompt: row.get(1)?,
            answer: row.get(2)?,
            date: row.get(3)?,
        })
    }

    fn row_to_gratitude(row: &rusqlite::Row) -> rusqlite::Result<Gratitude> {
        Ok(Gratitude {
            id: row.get(0)?,
            content: row.get(1)?,
            date: row.get(2)?,
        })
    }
}

impl QuoteRepository for SqliteRepository {
    fn get_daily_quote(&self, pool: &[BundledQuote]) -> Result<Quote> {
        self.daily_quote_for_day(&date_utils::today_key(), pool)
    }

    fn is_quote_saved(&self, text: &str, author: &str) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM saved_quotes WHERE text = ?1 AND author = ?2 LIMIT 1",
                params![text, author],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn save_quote(&self, text: &str, author: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO saved_quotes (text, author, date) VALUES (?1, ?2, ?3)",
            params![text, author, date_utils::now_rfc3339()],
        )?;
        Ok(())
    }

    fn remove_saved_quote(&self, text: &str, author: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM saved_quotes WHERE text = ?1 AND author = ?2",
            params![text, author],
        )?;
        Ok(())
    }

    fn get_saved_quotes(&self) -> Result<Vec<SavedQuote>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, text, author, date FROM saved_quotes ORDER BY date DESC",
        )?;
        let quotes = stmt
            .query_map([], |row| {
                Ok(SavedQuote {
                    id: row.get(0)?,
                    text: row.get(1)?,
                    author: row.get(2)?,
                    date: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(quotes)
    }
}

impl ReflectionRepository for SqliteRepository {
    fn get_daily_prompt(&self, candidates: &[&str]) -> Result<String> {
        self.daily_prompt_for_day(&date_utils::today_key(), candidates)
    }

    /// Upsert keyed on "a reflection exists today": saving twice in one day
    /// overwrites the existing row's prompt and answer and refreshes its
    /// date, so at most one reflection per day is retained.
    fn save_reflection(&self, prompt: &str, answer: &str) -> Result<()> {
        let date = date_utils::now_rfc3339();
        match self.get_today_reflection()? {
            Some(existing) => {
                self.conn.execute(
                    "UPDATE reflections SET prompt = ?1, answer = ?2, date = ?3 WHERE id = ?4",
                    params![prompt, answer, date, existing.id],
                )?;
            }
            None => {
                self.conn.execute(
                    "INSERT INTO reflections (prompt, answer, date) VALUES (?1, ?2, ?3)",
                    params![prompt, answer, date],
                )?;
            }
        }
        Ok(())
    }

    fn get_today_reflection(&self) -> Result<Option<Reflection>> {
        let (start, end) = date_utils::today_bounds();
        self.reflection_in_bounds(&start, &end)
    }

    fn get_reflections(&self) -> Result<Vec<Reflection>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, prompt, answer, date FROM reflections ORDER BY date DESC",
        )?;
        let reflections = stmt
            .query_map([], Self::row_to_reflection)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(reflections)
    }

    fn delete_reflection(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM reflections WHERE id = ?1", params![id])?;
        Ok(())
    }
}

impl GratitudeRepository for SqliteRepository {
    fn save_gratitude(&self, content: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO gratitudes (content, date) VALUES (?1, ?2)",
            params![content, date_utils::now_rfc3339()],
        )?;
        Ok(())
    }

    fn update_gratitude(&self, id: i64, content: &str) -> Result<()> {
        self.conn.execute(
            "UPDATE gratitudes SET content = ?1 WHERE id = ?2",
            params![content, id],
        )?;
        Ok(())
    }

    fn delete_gratitude(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM gratitudes WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn get_today_gratitudes(&self) -> Result<Vec<Gratitude>> {
        let (start, end) = date_utils::today_bounds();
        let mut stmt = self.conn.prepare(
            "SELECT id, content, date FROM gratitudes
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date DESC",
        )?;
        let gratitudes = stmt
            .query_map(params![start, end], Self::row_to_gratitude)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(gratitudes)
    }

    fn get_gratitudes(&self) -> Result<Vec<Gratitude>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, content, date FROM gratitudes ORDER BY date DESC")?;
        let gratitudes = stmt
            .query_map([], Self::row_to_gratitude)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(gratitudes)
    }
}

impl RoutineRepository for SqliteRepository {
    fn get_morning_routine_items(&self) -> Result<Vec<RoutineItem>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, label, checked FROM morning_routines ORDER BY id ASC")?;
        let items = stmt
            .query_map([], |row| {
                Ok(RoutineItem {
                    id: row.get(0)?,
                    label: row.get(1)?,
                    checked: row.get::<_, i64>(2)? != 0,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Replace the whole checklist in one transaction: delete everything,
    /// reinsert in list order. Caller-supplied ids are discarded; insertion
    /// order becomes the new ascending-id order. A failure mid-insert rolls
    /// the previous checklist back untouched.
    fn sync_morning_routine_items(&self, items: &[RoutineItem]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM morning_routines", [])?;
        for item in items {
            tx.execute(
                "INSERT INTO morning_routines (label, checked) VALUES (?1, ?2)",
                params![item.label, item.checked as i64],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn update_morning_routine_item_status(&self, id: i64, checked: bool) -> Result<()> {
        self.conn.execute(
            "UPDATE morning_routines SET checked = ?1 WHERE id = ?2",
            params![checked as i64, id],
        )?;
        Ok(())
    }
}

impl SettingsRepository for SqliteRepository {
    fn get_all_settings(&self) -> Result<AppSettings> {
        let mut stmt = self.conn.prepare("SELECT key, value FROM settings")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut settings = AppSettings::default();
        for row in rows {
            let (key, raw) = row?;
            // rows with keys this version does not recognize are kept in
            // the table but ignored here
            if let Some(key) = SettingKey::parse(&key) {
                settings.apply(key, raw);
            }
        }
        Ok(settings)
    }

    fn save_setting(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        let encoded = key.encode_checked(value)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![key.as_str(), encoded],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use journal_core::settings::SettingKind;
    use pretty_assertions::assert_eq;

    const POOL: &[BundledQuote] = &[
        BundledQuote {
            text: "first",
            author: "a",
        },
        BundledQuote {
            text: "second",
            author: "b",
        },
    ];

    fn open_pair(dir: &tempfile::TempDir) -> (SqliteRepository, SqliteRepository) {
        let path = dir.path().join("journal.db");
        let first = SqliteRepository::open(&path).unwrap();
        let second = SqliteRepository::open(&path).unwrap();
        (first, second)
    }

    #[test]
    fn daily_prompt_is_stable_across_calls() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let candidates = &["one", "two", "three"];
        let first = repo.daily_prompt_for_day("2026-02-14", candidates).unwrap();
        assert!(candidates.contains(&first.as_str()));
        for _ in 0..10 {
            let again = repo.daily_prompt_for_day("2026-02-14", candidates).unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn daily_quote_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.db");
        let chosen = {
            let repo = SqliteRepository::open(&path).unwrap();
            repo.daily_quote_for_day("2026-02-14", POOL).unwrap()
        };
        let repo = SqliteRepository::open(&path).unwrap();
        assert_eq!(repo.daily_quote_for_day("2026-02-14", POOL).unwrap(), chosen);
    }

    #[test]
    fn daily_prompt_race_converges_on_first_writer() {
        let dir = tempfile::tempdir().unwrap();
        let (first, second) = open_pair(&dir);

        // Both callers missed the cache and chose independently; the
        // second insert hits the primary-key constraint and must come
        // back with the first writer's value.
        assert_eq!(first.commit_daily_prompt("2026-02-14", "alpha").unwrap(), "alpha");
        assert_eq!(second.commit_daily_prompt("2026-02-14", "beta").unwrap(), "alpha");

        let count: i64 = second
            .conn
            .query_row("SELECT COUNT(*) FROM daily_prompts", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn daily_quote_race_converges_on_first_writer() {
        let dir = tempfile::tempdir().unwrap();
        let (first, second) = open_pair(&dir);

        let winner = first.commit_daily_quote("2026-02-14", "early", "x").unwrap();
        let loser = second.commit_daily_quote("2026-02-14", "late", "y").unwrap();
        assert_eq!(loser, winner);
        assert_eq!(loser.text, "early");
    }

    #[test]
    fn daily_prompt_rejects_empty_pool() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let err = repo.daily_prompt_for_day("2026-02-14", &[]).unwrap_err();
        assert!(matches!(err, StoreError::EmptyPool));
    }

    #[test]
    fn reflection_upsert_keeps_one_row_per_day() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.save_reflection("What went well?", "The walk").unwrap();
        repo.save_reflection("What did you learn?", "To rest").unwrap();

        let all = repo.get_reflections().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].prompt, "What did you learn?");
        assert_eq!(all[0].answer, "To rest");

        let today = repo.get_today_reflection().unwrap().unwrap();
        assert_eq!(today.id, all[0].id);
    }

    #[test]
    fn reflection_upsert_leaves_old_days_alone() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let old = (Utc::now() - Duration::days(3)).to_rfc3339();
        repo.conn
            .execute(
                "INSERT INTO reflections (prompt, answer, date) VALUES ('old?', 'yes', ?1)",
                params![old],
            )
            .unwrap();

        repo.save_reflection("new?", "also yes").unwrap();
        assert_eq!(repo.get_reflections().unwrap().len(), 2);
        // newest first
        assert_eq!(repo.get_reflections().unwrap()[0].prompt, "new?");
    }

    #[test]
    fn today_reflection_is_none_on_empty_store() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert!(repo.get_today_reflection().unwrap().is_none());
    }

    #[test]
    fn gratitudes_are_scoped_to_the_local_day() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.save_gratitude("morning coffee").unwrap();
        let old = (Utc::now() - Duration::days(2)).to_rfc3339();
        repo.conn
            .execute(
                "INSERT INTO gratitudes (content, date) VALUES ('old entry', ?1)",
                params![old],
            )
            .unwrap();

        let today = repo.get_today_gratitudes().unwrap();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].content, "morning coffee");

        let all = repo.get_gratitudes().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].content, "morning coffee");
        assert_eq!(all[1].content, "old entry");
    }

    #[test]
    fn gratitude_update_and_delete_by_id() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.save_gratitude("drafty").unwrap();
        repo.save_gratitude("kept").unwrap();
        let all = repo.get_gratitudes().unwrap();
        let drafty = all.iter().find(|g| g.content == "drafty").unwrap().id;

        repo.update_gratitude(drafty, "rewritten").unwrap();
        repo.delete_gratitude(
            all.iter().find(|g| g.content == "kept").unwrap().id,
        )
        .unwrap();

        let remaining = repo.get_gratitudes().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].content, "rewritten");
        assert_eq!(remaining[0].id, drafty);
    }

    fn item(label: &str, checked: bool) -> RoutineItem {
        RoutineItem {
            id: 0,
            label: label.to_string(),
            checked,
        }
    }

    #[test]
    fn routine_sync_preserves_order_and_reissues_ids() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.sync_morning_routine_items(&[item("Stretch", false), item("Hydrate", true)])
            .unwrap();

        let items = repo.get_morning_routine_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Stretch");
        assert_eq!(items[1].label, "Hydrate");
        assert!(items[0].id < items[1].id);
        assert!(items[1].checked);

        // ids supplied by the caller are advisory; the store issues fresh
        // ones on every sync
        let stale = RoutineItem {
            id: items[0].id,
            label: "Meditate".to_string(),
            checked: false,
        };
        repo.sync_morning_routine_items(&[stale]).unwrap();
        let resynced = repo.get_morning_routine_items().unwrap();
        assert_eq!(resynced.len(), 1);
        assert_ne!(resynced[0].id, items[0].id);
    }

    #[test]
    fn routine_sync_rolls_back_on_mid_insert_failure() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.sync_morning_routine_items(&[item("Stretch", true), item("Hydrate", false)])
            .unwrap();
        let before = repo.get_morning_routine_items().unwrap();

        repo.conn
            .execute_batch(
                "CREATE TRIGGER poison_insert BEFORE INSERT ON morning_routines
                 WHEN NEW.label = 'poison'
                 BEGIN SELECT RAISE(ABORT, 'poisoned'); END",
            )
            .unwrap();

        let result =
            repo.sync_morning_routine_items(&[item("Journal", false), item("poison", false)]);
        assert!(result.is_err());

        // the failed sync must leave the previous checklist fully intact
        assert_eq!(repo.get_morning_routine_items().unwrap(), before);
    }

    #[test]
    fn routine_status_update_touches_one_row() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.sync_morning_routine_items(&[item("Stretch", false), item("Hydrate", false)])
            .unwrap();
        let items = repo.get_morning_routine_items().unwrap();

        repo.update_morning_routine_item_status(items[0].id, true)
            .unwrap();

        let after = repo.get_morning_routine_items().unwrap();
        assert!(after[0].checked);
        assert!(!after[1].checked);
        assert_eq!(after[0].label, "Stretch");
    }

    #[test]
    fn saved_quote_toggle_round_trip() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert!(!repo.is_quote_saved("A", "B").unwrap());

        repo.save_quote("A", "B").unwrap();
        assert!(repo.is_quote_saved("A", "B").unwrap());
        assert!(!repo.is_quote_saved("A", "C").unwrap());

        repo.remove_saved_quote("A", "B").unwrap();
        assert!(!repo.is_quote_saved("A", "B").unwrap());
        assert!(repo.get_saved_quotes().unwrap().is_empty());
    }

    #[test]
    fn saving_the_same_quote_twice_duplicates_it() {
        // uniqueness is an application-level existence check; the table
        // itself accepts duplicates, and removal clears every match
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.save_quote("A", "B").unwrap();
        repo.save_quote("A", "B").unwrap();
        assert_eq!(repo.get_saved_quotes().unwrap().len(), 2);

        repo.remove_saved_quote("A", "B").unwrap();
        assert!(repo.get_saved_quotes().unwrap().is_empty());
    }

    #[test]
    fn settings_default_overlay_on_empty_table() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert_eq!(repo.get_all_settings().unwrap(), AppSettings::default());
    }

    #[test]
    fn settings_overlay_stored_rows_over_defaults() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.save_setting(SettingKey::DailyGratitude, SettingValue::Toggle(false))
            .unwrap();
        repo.save_setting(SettingKey::PrimaryColorIndex, SettingValue::Index(2))
            .unwrap();
        // a second save to the same key replaces the row
        repo.save_setting(SettingKey::PrimaryColorIndex, SettingValue::Index(4))
            .unwrap();

        let settings = repo.get_all_settings().unwrap();
        assert!(!settings.show_daily_gratitude);
        assert_eq!(settings.primary_color_index, 4);
        assert!(settings.show_daily_quote);
    }

    #[test]
    fn settings_ignore_unrecognized_rows() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.conn
            .execute(
                "INSERT INTO settings (key, value) VALUES ('setting_retired', 0)",
                [],
            )
            .unwrap();
        assert_eq!(repo.get_all_settings().unwrap(), AppSettings::default());
    }

    #[test]
    fn settings_reject_value_of_wrong_kind() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let err = repo
            .save_setting(SettingKey::DailyQuote, SettingValue::Index(1))
            .unwrap_err();
        match err {
            StoreError::SettingType(e) => assert_eq!(e.expected, SettingKind::Toggle),
            other => panic!("expected SettingType error, got {other:?}"),
        }
        // nothing was written
        assert_eq!(repo.get_all_settings().unwrap(), AppSettings::default());
    }

    #[test]
    fn initialization_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.db");
        {
            let repo = SqliteRepository::open(&path).unwrap();
            repo.save_gratitude("kept across reopen").unwrap();
        }
        // reopening re-runs schema creation against existing tables
        let repo = SqliteRepository::open(&path).unwrap();
        assert_eq!(repo.get_gratitudes().unwrap().len(), 1);
    }
}
