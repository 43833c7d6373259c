//! Developer data-access contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate list/add/update/password/delete/authenticate into one
//!   parameterized statement each.
//! - Map joined developer/profile rows positionally into `Developer`.
//!
//! # Invariants
//! - Reads use an inner join: developers without a resolvable profile are
//!   excluded from results, not reported.
//! - Result order is whatever the store returns; no `ORDER BY` is applied.
//! - Passwords are bound once as plaintext and hashed by the store with
//!   `SHA2(:pwd, 256)`; they are never selected back.
//! - Every named parameter matches a placeholder in its statement text,
//!   including `:id` for row-matching predicates.

use super::row::{integer_column, text_column};
use super::{ensure_connection_ready, RepoError, RepoResult};
use crate::model::developer::{AdminCredentials, Developer, DeveloperId, NewDeveloper};
use crate::model::profile::{Profile, ProfileId};
use log::debug;
use rusqlite::{named_params, Connection, Row, Rows};

const DEVELOPER_SELECT_SQL: &str = "SELECT d.id, d.last, d.first, d.phone, d.email, p.id, p.name \
FROM developer d INNER JOIN profile p ON d.profile_id = p.id";

const DEVELOPER_PROFILE_FILTER_SQL: &str = " WHERE d.profile_id = :filter";

const ADMIN_COUNT_SQL: &str = "SELECT COUNT(*) \
FROM developer d INNER JOIN profile p ON d.profile_id = p.id \
WHERE d.last = :last AND d.first = :first AND d.password = SHA2(:pwd, 256) AND p.name = 'admin'";

const DEVELOPER_INSERT_SQL: &str = "INSERT INTO developer(last, first, phone, email, password, profile_id) \
VALUES (:last, :first, :phone, :email, SHA2(:pwd, 256), :profileId)";

const DEVELOPER_UPDATE_SQL: &str = "UPDATE developer \
SET last=:last, first=:first, phone=:phone, email=:email, profile_id=:profileId \
WHERE id = :id";

const DEVELOPER_DELETE_SQL: &str = "DELETE FROM developer WHERE id = :id";

const DEVELOPER_PASSWORD_UPDATE_SQL: &str =
    "UPDATE developer SET password = SHA2(:pwd, 256) WHERE id = :id";

/// Repository interface for developer administration.
pub trait DeveloperRepository {
    /// Lists developers joined with their profile, optionally for one profile.
    fn list_developers(&self, profile_filter: Option<ProfileId>) -> RepoResult<Vec<Developer>>;
    /// Inserts a developer; the store assigns the identifier.
    fn add_developer(&self, developer: &NewDeveloper) -> RepoResult<()>;
    /// Rewrites every field except the password for `developer.id`.
    fn update_developer(&self, developer: &Developer) -> RepoResult<()>;
    /// Replaces the stored password hash for `id`.
    fn update_password(&self, id: DeveloperId, password: &str) -> RepoResult<()>;
    /// Deletes the row with `id`.
    fn delete_developer(&self, id: DeveloperId) -> RepoResult<()>;
    /// True iff exactly one admin-profile developer matches the credentials.
    fn authenticate_admin(&self, credentials: &AdminCredentials) -> RepoResult<bool>;
}

/// SQLite-backed developer repository.
pub struct SqliteDeveloperRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDeveloperRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl DeveloperRepository for SqliteDeveloperRepository<'_> {
    fn list_developers(&self, profile_filter: Option<ProfileId>) -> RepoResult<Vec<Developer>> {
        let sql = match profile_filter {
            Some(_) => format!("{DEVELOPER_SELECT_SQL}{DEVELOPER_PROFILE_FILTER_SQL}"),
            None => DEVELOPER_SELECT_SQL.to_string(),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = match profile_filter {
            Some(filter) => stmt.query(named_params! { ":filter": filter })?,
            None => stmt.query([])?,
        };
        let developers = collect_developers(rows)?;

        debug!(
            "event=developer_list module=repo status=ok filtered={} count={}",
            profile_filter.is_some(),
            developers.len()
        );
        Ok(developers)
    }

    fn add_developer(&self, developer: &NewDeveloper) -> RepoResult<()> {
        self.conn.execute(
            DEVELOPER_INSERT_SQL,
            named_params! {
                ":last": developer.last_name.as_str(),
                ":first": developer.first_name.as_str(),
                ":phone": developer.phone.as_str(),
                ":email": developer.email.as_str(),
                ":pwd": developer.password.as_str(),
                ":profileId": developer.profile_id,
            },
        )?;

        debug!(
            "event=developer_add module=repo status=ok profile_id={}",
            developer.profile_id
        );
        Ok(())
    }

    fn update_developer(&self, developer: &Developer) -> RepoResult<()> {
        let changed = self.conn.execute(
            DEVELOPER_UPDATE_SQL,
            named_params! {
                ":last": developer.last_name.as_deref(),
                ":first": developer.first_name.as_deref(),
                ":phone": developer.phone.as_deref(),
                ":email": developer.email.as_deref(),
                ":profileId": developer.profile.id,
                ":id": developer.id,
            },
        )?;
        ensure_changed(changed, developer.id, "developer_update")
    }

    fn update_password(&self, id: DeveloperId, password: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            DEVELOPER_PASSWORD_UPDATE_SQL,
            named_params! { ":pwd": password, ":id": id },
        )?;
        ensure_changed(changed, id, "developer_password_update")
    }

    fn delete_developer(&self, id: DeveloperId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(DEVELOPER_DELETE_SQL, named_params! { ":id": id })?;
        ensure_changed(changed, id, "developer_delete")
    }

    fn authenticate_admin(&self, credentials: &AdminCredentials) -> RepoResult<bool> {
        let count: i64 = self.conn.query_row(
            ADMIN_COUNT_SQL,
            named_params! {
                ":last": credentials.last_name.as_str(),
                ":first": credentials.first_name.as_str(),
                ":pwd": credentials.password.as_str(),
            },
            |row| row.get(0),
        )?;
        Ok(count == 1)
    }
}

fn ensure_changed(changed: usize, id: DeveloperId, event: &str) -> RepoResult<()> {
    if changed == 0 {
        debug!("event={event} module=repo status=not_found developer_id={id}");
        return Err(RepoError::NotFound(id));
    }
    debug!("event={event} module=repo status=ok developer_id={id}");
    Ok(())
}

fn collect_developers(mut rows: Rows<'_>) -> RepoResult<Vec<Developer>> {
    let mut developers = Vec::new();
    while let Some(row) = rows.next()? {
        developers.push(parse_developer_row(row)?);
    }
    Ok(developers)
}

fn parse_developer_row(row: &Row<'_>) -> RepoResult<Developer> {
    Ok(Developer {
        id: integer_column(row, 0, "developer.id")?,
        last_name: text_column(row, 1, "developer.last")?,
        first_name: text_column(row, 2, "developer.first")?,
        phone: text_column(row, 3, "developer.phone")?,
        email: text_column(row, 4, "developer.email")?,
        profile: Profile {
            id: integer_column(row, 5, "profile.id")?,
            name: text_column(row, 6, "profile.name")?,
        },
    })
}
