// src/export/logic.rs

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::guests::list_guests;
use crate::db::queries::tables::list_tables;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_rows;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::PathBuf;

/// High-level export of the sitting plan.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one row per guest with the name of their table.
    ///
    /// - `format`: csv | xlsx | json
    /// - `file`: absolute path of the output file (`~/` is expanded)
    ///
    /// Returns the written path, or `None` when there was nothing to
    /// export or the user refused to overwrite.
    pub fn export(
        pool: &DbPool,
        owner: &str,
        format: ExportFormat,
        file: &str,
        placeholder: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = crate::utils::path::expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let guests = list_guests(&pool.conn, owner)?;
        if guests.is_empty() {
            warning("No guests to export.");
            return Ok(None);
        }

        if !ensure_writable(&path, force)? {
            return Ok(None);
        }

        let tables = list_tables(&pool.conn, owner)?;
        let rows = build_rows(&guests, &tables, placeholder);

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path, placeholder)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} rows as {}", rows.len(), format.as_str()),
        )?;

        Ok(Some(path))
    }
}
