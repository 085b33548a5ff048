//! SQLite row count probe.
//!
//! Opens a database file read-only, confirms a table exists, counts its rows,
//! and fetches the most recently inserted row as a sample.

use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};

use crate::checklist::{CheckResult, FailureKind, Probe};

use super::DEFAULT_TIMEOUT;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

/// Longest rendered value in a sample row before truncation.
const MAX_SAMPLE_VALUE_LEN: usize = 60;

/// Whether a table name is a plain SQL identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// One column of a sample row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleColumn {
    pub name: String,
    pub value: String,
}

/// Raw outcome of a row count query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCountOutcome {
    /// Whether both the database file and the table exist.
    pub exists: bool,
    /// Number of rows (0 when absent).
    pub count: i64,
    /// Most recently inserted row, if any.
    pub sample_row: Option<Vec<SampleColumn>>,
    /// Why the table could not be read.
    pub cause: Option<String>,
}

impl RowCountOutcome {
    fn missing(cause: String) -> Self {
        Self {
            exists: false,
            count: 0,
            sample_row: None,
            cause: Some(cause),
        }
    }
}

/// Counts the rows of one table in a SQLite file.
#[derive(Debug, Clone)]
pub struct RowCountProbe {
    database: PathBuf,
    table: String,
    timeout: Duration,
}

impl RowCountProbe {
    /// Create a probe for a database file and table.
    pub fn new(database: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            table: table.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set how long to wait on a locked database.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run the query. Never fails: problems become `exists = false`.
    pub fn check(&self) -> RowCountOutcome {
        if !is_valid_identifier(&self.table) {
            return RowCountOutcome::missing(format!("Invalid table name '{}'", self.table));
        }

        if !self.database.is_file() {
            return RowCountOutcome::missing(format!(
                "Database not found at {}",
                self.database.display()
            ));
        }

        match self.query() {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!("Row count query on {} failed: {}", self.database.display(), e);
                RowCountOutcome::missing(format!("Database error: {}", e))
            }
        }
    }

    fn query(&self) -> rusqlite::Result<RowCountOutcome> {
        let conn = Connection::open_with_flags(
            &self.database,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(self.timeout)?;

        let table_exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master \
             WHERE type IN ('table', 'view') AND name = ?1 COLLATE NOCASE)",
            [&self.table],
            |row| row.get(0),
        )?;
        if !table_exists {
            return Ok(RowCountOutcome::missing(format!(
                "Table '{}' not found in {}",
                self.table,
                self.database.display()
            )));
        }

        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM \"{}\"", self.table),
            [],
            |row| row.get(0),
        )?;

        let sample_row = if count > 0 {
            self.latest_row(&conn)?
        } else {
            None
        };

        Ok(RowCountOutcome {
            exists: true,
            count,
            sample_row,
            cause: None,
        })
    }

    fn latest_row(&self, conn: &Connection) -> rusqlite::Result<Option<Vec<SampleColumn>>> {
        // Views and WITHOUT ROWID tables have no rowid to order by.
        let by_rowid = format!("SELECT * FROM \"{}\" ORDER BY rowid DESC LIMIT 1", self.table);
        match fetch_one(conn, &by_rowid) {
            Ok(row) => Ok(row),
            Err(_) => fetch_one(conn, &format!("SELECT * FROM \"{}\" LIMIT 1", self.table)),
        }
    }
}

fn fetch_one(conn: &Connection, sql: &str) -> rusqlite::Result<Option<Vec<SampleColumn>>> {
    let mut stmt = conn.prepare(sql)?;
    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    stmt.query_row([], |row| {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Ok(SampleColumn {
                    name: name.clone(),
                    value: render_value(row.get_ref(i)?),
                })
            })
            .collect::<rusqlite::Result<Vec<_>>>()
    })
    .optional()
}

fn render_value(value: ValueRef<'_>) -> String {
    let rendered = match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    };

    if rendered.chars().count() > MAX_SAMPLE_VALUE_LEN {
        let truncated: String = rendered.chars().take(MAX_SAMPLE_VALUE_LEN).collect();
        format!("{}…", truncated)
    } else {
        rendered
    }
}

/// Render a sample row as `name=value` pairs.
pub fn format_sample_row(row: &[SampleColumn]) -> String {
    row.iter()
        .map(|c| format!("{}={}", c.name, c.value))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Probe for RowCountProbe {
    fn describe(&self) -> String {
        format!("rows in {} ({})", self.table, self.database.display())
    }

    fn evaluate(&self) -> anyhow::Result<CheckResult> {
        let outcome = self.check();

        if !outcome.exists {
            return Ok(CheckResult::fail(
                FailureKind::ResourceMissing,
                outcome.cause.unwrap_or_default(),
            ));
        }

        if outcome.count == 0 {
            return Ok(CheckResult::fail(
                FailureKind::ResourceEmpty,
                format!("Table '{}' is empty", self.table),
            ));
        }

        let mut result = CheckResult::pass(format!(
            "Database exists with {} records",
            outcome.count
        ));
        if let Some(row) = &outcome.sample_row {
            result = result.with_note(format!("Latest record: {}", format_sample_row(row)));
        }
        Ok(result)
    }
}
