//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! Besides the connection it owns the in-process change feed, so every
//! mutation done through the core logic can notify subscribers.

use crate::db::changes::{Change, ChangeFeed};
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    pub changes: ChangeFeed,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self {
            conn,
            changes: ChangeFeed::default(),
        })
    }

    /// Open the database and bring the schema up to date.
    pub fn open_initialized(path: &str) -> crate::errors::AppResult<Self> {
        let pool = Self::new(path)?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Forward a row change to the subscribers of the feed.
    /// Returns how many received it (zero when nobody subscribed).
    pub fn notify(&mut self, change: Change) -> usize {
        self.changes.publish(change)
    }
}
