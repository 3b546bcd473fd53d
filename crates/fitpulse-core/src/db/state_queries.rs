//! Load and save queries for the state object.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{AppState, STATE_KEY},
};

const SELECT_STATE_SQL: &str = "SELECT value FROM app_state WHERE key = ?1";
const UPSERT_STATE_SQL: &str = "INSERT INTO app_state (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Loads the state object. A missing row yields the default state.
    pub fn load_state(&self) -> Result<AppState> {
        read_state(&self.connection)
    }

    /// Persists the whole state object, replacing the previous one.
    ///
    /// Returns the time the state was written.
    pub fn save_state(&mut self, state: &AppState) -> Result<Timestamp> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;
        let now = write_state(&tx, state)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(now)
    }

    /// Loads, modifies and saves the state in one write transaction.
    ///
    /// The write lock is taken before the state is read, so concurrent
    /// connections to the same file wait instead of overwriting each other.
    /// `f` returns its output and whether the state changed. An error from
    /// `f` rolls the transaction back.
    pub fn update_state<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut AppState) -> Result<(T, bool)>,
    {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let mut state = read_state(&tx)?;
        let (output, changed) = f(&mut state)?;
        if changed {
            write_state(&tx, &state)?;
        }
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(output)
    }
}

fn read_state(connection: &Connection) -> Result<AppState> {
    let raw: Option<String> = connection
        .query_row(SELECT_STATE_SQL, params![STATE_KEY], |row| row.get(0))
        .optional()
        .db_context("Failed to query state")?;

    match raw {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(AppState::default()),
    }
}

fn write_state(connection: &Connection, state: &AppState) -> Result<Timestamp> {
    let json = serde_json::to_string(state)?;
    let now = Timestamp::now();
    connection
        .execute(UPSERT_STATE_SQL, params![STATE_KEY, json, now.to_string()])
        .db_context("Failed to save state")?;
    Ok(now)
}
