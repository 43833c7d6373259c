//! Repository layer: the developer data-access component and profile reads.
//!
//! # Responsibility
//! - Own every SQL statement text and its parameter bindings.
//! - Map raw rows into domain records with typed decoding.
//!
//! # Invariants
//! - Each operation is exactly one statement; no caching, retries or
//!   multi-statement transactions.
//! - No input validation happens here; callers own form rules.
//! - Repository APIs return semantic errors (`NotFound`, `Decode`) in
//!   addition to DB transport errors, and never terminate the process.

pub mod developer_repo;
mod error;
pub mod profile_repo;
mod row;

pub use error::{RepoError, RepoResult};

use crate::db::functions::register_hash_functions;
use crate::db::migrations::{current_version, latest_version};
use rusqlite::Connection;

const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("profile", &["id", "name"]),
    (
        "developer",
        &[
            "id",
            "last",
            "first",
            "phone",
            "email",
            "password",
            "profile_id",
        ],
    ),
];

/// Verifies that `conn` was bootstrapped for repository use.
///
/// # Side effects
/// - (Re-)registers the store-side hash function on `conn`.
pub(crate) fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for &(table, columns) in REQUIRED_COLUMNS {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        let present = table_columns(conn, table)?;
        if let Some(column) = columns
            .iter()
            .copied()
            .find(|column| !present.iter().any(|name| name == column))
        {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    register_hash_functions(conn)?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let names = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}
