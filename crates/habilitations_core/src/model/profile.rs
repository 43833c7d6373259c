//! Profile (role) domain model.

use serde::{Deserialize, Serialize};

/// Store-assigned profile identifier.
pub type ProfileId = i64;

/// Profile name granting access to the administration tool.
pub const ADMIN_PROFILE_NAME: &str = "admin";

/// Named role assigned to developers.
///
/// Profiles are provisioned by the store; core only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    /// `None` when the stored name is NULL.
    pub name: Option<String>,
}

impl Profile {
    pub fn new(id: ProfileId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Whether this profile grants access to the administration tool.
    pub fn is_admin(&self) -> bool {
        self.name.as_deref() == Some(ADMIN_PROFILE_NAME)
    }

    /// Returns the display name, or an empty string for a NULL name.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
