//! Plain SQL access for every store table.
//!
//! Functions here only read and write rows; validation, audit logging and
//! change notification live in `core`.

pub mod categories;
pub mod events;
pub mod guests;
pub mod profiles;
pub mod projects;
pub mod tables;

use crate::errors::AppError;

/// Turn a parse failure on a TEXT column into a rusqlite conversion error.
pub(crate) fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}
