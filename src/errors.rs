//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid event category: {0}")]
    InvalidCategory(String),

    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("{entity} #{id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("No project found: create one with `wedplanner project add <NAME>`")]
    NoProject,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // User-facing wrapper: "Failed to <action>: <cause>"
    // ---------------------------
    #[error("Failed to {action}: {source}")]
    Failed {
        action: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        AppError::NotFound { entity, id }
    }

    /// The innermost error, skipping any `Failed` wrappers.
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Failed { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Wrap a failure into the user-facing `Failed to <action>` form.
pub trait ActionContext<T> {
    fn failed_to(self, action: &str) -> AppResult<T>;
}

impl<T, E: Into<AppError>> ActionContext<T> for Result<T, E> {
    fn failed_to(self, action: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Failed {
            action: action.to_string(),
            source: Box::new(e.into()),
        })
    }
}
