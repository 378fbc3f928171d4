//! SQLite-based store implementation

use rusqlite::{params, Connection};
use skillboard_api::SkillRecord;
use skillboard_util::SkillId;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::{Store, StoreResult};

/// SQLite-based store.
///
/// Each operation opens its own connection and releases it on drop, on
/// error paths included, so no handle is held across requests. Requests
/// may run on separate workers; the busy timeout lets a connection wait
/// out another worker's write lock.
pub struct SqliteStore {
    db_path: PathBuf,
}

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl SqliteStore {
    /// Open or create a store at the given path.
    ///
    /// Ensures the schema exists before returning; a failure here means
    /// the process must not start serving requests.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let store = Self {
            db_path: path.to_path_buf(),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Acquire a scoped connection for one operation.
    fn connect(&self) -> StoreResult<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.connect()?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS skills(
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                skill TEXT NOT NULL,
                level TEXT NOT NULL
            );
            "#,
        )?;

        debug!("Store schema initialized");
        Ok(())
    }
}

fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SkillRecord> {
    Ok(SkillRecord {
        id: SkillId::new(row.get(0)?),
        name: row.get(1)?,
        skill: row.get(2)?,
        level: row.get(3)?,
    })
}

impl Store for SqliteStore {
    fn list(&self) -> StoreResult<Vec<SkillRecord>> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare("SELECT id, name, skill, level FROM skills")?;
        let rows = stmt.query_map([], record_from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        Ok(records)
    }

    fn insert(&self, name: &str, skill: &str, level: &str) -> StoreResult<SkillId> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT INTO skills(name, skill, level) VALUES(?, ?, ?)",
            params![name, skill, level],
        )?;

        let id = SkillId::new(conn.last_insert_rowid());
        debug!(id = %id, "Skill inserted");

        Ok(id)
    }

    fn update(&self, id: SkillId, name: &str, skill: &str, level: &str) -> StoreResult<()> {
        let conn = self.connect()?;

        let affected = conn.execute(
            "UPDATE skills SET name = ?, skill = ?, level = ? WHERE id = ?",
            params![name, skill, level, id.as_i64()],
        )?;

        debug!(id = %id, affected, "Skill updated");
        Ok(())
    }

    fn delete(&self, id: SkillId) -> StoreResult<()> {
        let conn = self.connect()?;

        let affected = conn.execute("DELETE FROM skills WHERE id = ?", [id.as_i64()])?;

        debug!(id = %id, affected, "Skill deleted");
        Ok(())
    }

    fn search_skill(&self, fragment: &str) -> StoreResult<Vec<SkillRecord>> {
        let conn = self.connect()?;

        let mut stmt =
            conn.prepare("SELECT id, name, skill, level FROM skills WHERE skill LIKE ?")?;
        let pattern = format!("%{}%", fragment);
        let rows = stmt.query_map([pattern], record_from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        Ok(records)
    }

    fn count(&self) -> StoreResult<u64> {
        let conn = self.connect()?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM skills", [], |row| row.get(0))?;

        Ok(count as u64)
    }

    fn is_healthy(&self) -> bool {
        match self.connect() {
            Ok(conn) => conn.query_row("SELECT 1", [], |_| Ok(())).is_ok(),
            Err(_) => false,
        }
    }
}
