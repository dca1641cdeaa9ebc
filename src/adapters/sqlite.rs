//! Relational blueprint store on SQLite.
//!
//! Blueprints live in a parent table keyed by a generated id with a unique
//! `(author, name)` constraint; their points live in a child table keyed by
//! `(blueprint_id, point_order)`. Reads always order by `point_order`.
//!
//! The connection is shared behind a mutex and every call runs on the
//! blocking thread pool.

use crate::core::{Blueprint, BlueprintStore, Point, Result};
use crate::utils::error::BlueprintError;
use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, TransactionBehavior};
use std::path::Path;
use std::sync::Arc;

const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS blueprints (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    author TEXT NOT NULL,
    name   TEXT NOT NULL,
    CONSTRAINT uk_blueprint_author_name UNIQUE (author, name)
);

CREATE TABLE IF NOT EXISTS blueprint_points (
    blueprint_id INTEGER NOT NULL REFERENCES blueprints(id) ON DELETE CASCADE,
    point_order  INTEGER NOT NULL,
    x            INTEGER NOT NULL,
    y            INTEGER NOT NULL,
    PRIMARY KEY (blueprint_id, point_order)
);
";

// LEFT JOIN so blueprints without points still come back.
const SELECT_WITH_POINTS: &str = "
SELECT b.id, b.author, b.name, p.x, p.y
FROM blueprints b
LEFT JOIN blueprint_points p ON p.blueprint_id = b.id";

#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) the database file and ensures the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Opening SQLite store at {}", path.as_ref().display());
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock();
            op(&mut guard)
        })
        .await?
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Runs a `SELECT_WITH_POINTS` query and folds rows into blueprints.
///
/// Rows must arrive grouped by blueprint id with points in `point_order`.
fn load_blueprints(
    conn: &Connection,
    filter: &str,
    args: &[&dyn rusqlite::ToSql],
) -> Result<Vec<Blueprint>> {
    let sql = format!(
        "{} {} ORDER BY b.author, b.name, p.point_order",
        SELECT_WITH_POINTS, filter
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(args)?;

    let mut blueprints: Vec<Blueprint> = Vec::new();
    let mut current_id: Option<i64> = None;

    while let Some(row) = rows.next()? {
        let id: i64 = row.get(0)?;
        if current_id != Some(id) {
            blueprints.push(Blueprint::new(
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                Vec::new(),
            ));
            current_id = Some(id);
        }

        let x: Option<i32> = row.get(3)?;
        let y: Option<i32> = row.get(4)?;
        if let (Some(x), Some(y), Some(bp)) = (x, y, blueprints.last_mut()) {
            bp.add_point(Point::new(x, y));
        }
    }

    Ok(blueprints)
}

#[async_trait]
impl BlueprintStore for SqliteStore {
    async fn save(&self, blueprint: Blueprint) -> Result<()> {
        self.run(move |conn| {
            let tx = conn.transaction()?;

            // The unique constraint decides; no separate existence check.
            match tx.execute(
                "INSERT INTO blueprints (author, name) VALUES (?1, ?2)",
                params![blueprint.author, blueprint.name],
            ) {
                Ok(_) => {}
                Err(e) if is_unique_violation(&e) => {
                    return Err(BlueprintError::already_exists(
                        &blueprint.author,
                        &blueprint.name,
                    ));
                }
                Err(e) => return Err(e.into()),
            }
            let id = tx.last_insert_rowid();

            {
                let mut insert = tx.prepare(
                    "INSERT INTO blueprint_points (blueprint_id, point_order, x, y) \
                     VALUES (?1, ?2, ?3, ?4)",
                )?;
                for (order, point) in blueprint.points.iter().enumerate() {
                    insert.execute(params![id, order as i64, point.x, point.y])?;
                }
            }

            tx.commit()?;
            Ok(())
        })
        .await
    }

    async fn get(&self, author: &str, name: &str) -> Result<Blueprint> {
        let (author, name) = (author.to_string(), name.to_string());
        self.run(move |conn| {
            load_blueprints(
                conn,
                "WHERE b.author = ?1 AND b.name = ?2",
                &[&author, &name],
            )?
            .into_iter()
            .next()
            .ok_or_else(|| BlueprintError::blueprint_not_found(&author, &name))
        })
        .await
    }

    async fn get_by_author(&self, author: &str) -> Result<Vec<Blueprint>> {
        let author = author.to_string();
        self.run(move |conn| {
            let found = load_blueprints(conn, "WHERE b.author = ?1", &[&author])?;
            if found.is_empty() {
                return Err(BlueprintError::author_not_found(&author));
            }
            Ok(found)
        })
        .await
    }

    async fn get_all(&self) -> Result<Vec<Blueprint>> {
        self.run(|conn| load_blueprints(conn, "", &[])).await
    }

    async fn append_point(&self, author: &str, name: &str, point: Point) -> Result<()> {
        let (author, name) = (author.to_string(), name.to_string());
        self.run(move |conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let id: i64 = tx
                .query_row(
                    "SELECT id FROM blueprints WHERE author = ?1 AND name = ?2",
                    params![author, name],
                    |row| row.get(0),
                )
                .optional()?
                .ok_or_else(|| BlueprintError::blueprint_not_found(&author, &name))?;

            tx.execute(
                "INSERT INTO blueprint_points (blueprint_id, point_order, x, y) \
                 SELECT ?1, COALESCE(MAX(point_order) + 1, 0), ?2, ?3 \
                 FROM blueprint_points WHERE blueprint_id = ?1",
                params![id, point.x, point.y],
            )?;

            tx.commit()?;
            Ok(())
        })
        .await
    }
}
