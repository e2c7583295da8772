use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists: it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Check if `table` has a column named `column`.
pub(crate) fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_core_schema",
        description: "Created profiles, projects and events tables",
        apply: create_core_schema,
    },
    Migration {
        version: "20250301_0002_guest_schema",
        description: "Created guest_categories, tables and guests tables",
        apply: create_guest_schema,
    },
    Migration {
        version: "20250412_0003_event_location",
        description: "Added location column to events",
        apply: add_event_location,
    },
];

fn create_core_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id          TEXT PRIMARY KEY,
            bride_name  TEXT,
            groom_name  TEXT,
            updated_at  TEXT
        );

        CREATE TABLE IF NOT EXISTS projects (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            wedding_date  TEXT,
            owner         TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id   INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            start_time   TEXT NOT NULL,
            end_time     TEXT NOT NULL,
            duration     INTEGER NOT NULL CHECK(duration >= 0 AND duration < 1440),
            title        TEXT NOT NULL,
            description  TEXT,
            category     TEXT NOT NULL DEFAULT 'Ceremony'
                         CHECK(category IN ('Ceremony','Reception','Photos','Setup')),
            owner        TEXT NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_projects_owner ON projects(owner);
        CREATE INDEX IF NOT EXISTS idx_events_project_start ON events(project_id, start_time);
        "#,
    )
}

fn create_guest_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS guest_categories (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            name   TEXT NOT NULL,
            owner  TEXT NOT NULL,
            UNIQUE(owner, name)
        );

        CREATE TABLE IF NOT EXISTS tables (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            owner       TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS guests (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            category_id  INTEGER NOT NULL REFERENCES guest_categories(id),
            table_id     INTEGER REFERENCES tables(id) ON DELETE SET NULL,
            owner        TEXT NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_guests_owner ON guests(owner);
        CREATE INDEX IF NOT EXISTS idx_guests_table ON guests(table_id);
        "#,
    )
}

fn add_event_location(conn: &Connection) -> Result<()> {
    if has_column(conn, "events", "location")? {
        return Ok(());
    }
    conn.execute("ALTER TABLE events ADD COLUMN location TEXT;", [])?;
    Ok(())
}

/// Names of the migrations not yet applied, in order.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        (m.apply)(conn)?;
        mark_applied(conn, m.version, m.description)?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}
