use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or with `compress` write a
    /// .zip archive holding it (`dest_file` with a `.zip` extension).
    /// Returns the path actually written, or `None` if the user declined
    /// to overwrite an existing file.
    pub fn backup(
        pool: &DbPool,
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = crate::utils::path::expand_tilde(dest_file);

        if !src.exists() {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // the file actually written: with --compress, the archive
        let target = if compress { zip_path_for(&dest) } else { dest.clone() };

        if target.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite it?",
                target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        if compress {
            compress_backup(src, &target, &entry_name_for(src, &dest))?;
        } else {
            fs::copy(src, &target)?;
        }
        success(format!("Backup created: {}", target.display()));

        audit(
            &pool.conn,
            "backup",
            &target.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        Ok(Some(target))
    }
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("zip"))
}

/// `backup.sqlite` → `backup.zip`; a `.zip` path is kept as is.
fn zip_path_for(dest: &Path) -> PathBuf {
    if is_zip(dest) {
        dest.to_path_buf()
    } else {
        dest.with_extension("zip")
    }
}

/// Name of the database inside the archive: the requested file name,
/// or the database's own name when the destination is the archive itself.
fn entry_name_for(src: &Path, dest: &Path) -> String {
    let named = if is_zip(dest) { src } else { dest };
    named
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "wedplanner.sqlite".to_string())
}

/// Stream the database file straight into a .zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path, entry_name: &str) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("📦 Compressed: {}", zip_path.display()));

    Ok(())
}
