//! Core of the habilitations administration tool.
//!
//! Owns the developer/profile store, the developer data-access component and
//! the administration use-cases; UI front ends call into this crate only.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::developer::{AdminCredentials, Developer, DeveloperId, NewDeveloper};
pub use model::profile::{Profile, ProfileId, ADMIN_PROFILE_NAME};
pub use repo::developer_repo::{DeveloperRepository, SqliteDeveloperRepository};
pub use repo::profile_repo::{ProfileRepository, SqliteProfileRepository};
pub use repo::{RepoError, RepoResult};
pub use service::habilitations_service::{
    filter_from_selection, DeveloperForm, FormError, HabilitationsService, PasswordChange,
    ServiceError, ServiceResult, NO_FILTER_PROFILE_ID,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
