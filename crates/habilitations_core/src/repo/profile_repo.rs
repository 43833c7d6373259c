//! Profile read access.
//!
//! Profiles are provisioned by the store; this repository only lists them
//! for pickers and the developer list filter.

use super::row::{integer_column, text_column};
use super::{ensure_connection_ready, RepoResult};
use crate::model::profile::Profile;
use rusqlite::{Connection, Row};

const PROFILE_SELECT_SQL: &str = "SELECT id, name FROM profile";

/// Repository interface for profile reads.
pub trait ProfileRepository {
    /// Returns every profile in store order.
    fn list_profiles(&self) -> RepoResult<Vec<Profile>>;
}

/// SQLite-backed profile repository.
pub struct SqliteProfileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ProfileRepository for SqliteProfileRepository<'_> {
    fn list_profiles(&self) -> RepoResult<Vec<Profile>> {
        let mut stmt = self.conn.prepare(PROFILE_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut profiles = Vec::new();
        while let Some(row) = rows.next()? {
            profiles.push(parse_profile_row(row)?);
        }
        Ok(profiles)
    }
}

fn parse_profile_row(row: &Row<'_>) -> RepoResult<Profile> {
    Ok(Profile {
        id: integer_column(row, 0, "profile.id")?,
        name: text_column(row, 1, "profile.name")?,
    })
}
