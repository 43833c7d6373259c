//! Developer administration use-case service.
//!
//! # Responsibility
//! - Expose the administration flows (list, filter, add, edit, delete,
//!   password reset, admin sign-in) to UI callers.
//! - Enforce form rules before any repository call.
//!
//! # Invariants
//! - Every display field of a developer form must be non-blank.
//! - A password change needs two identical, non-empty entries.
//! - Profile selection `0` means "no filter".

use crate::model::developer::{AdminCredentials, Developer, DeveloperId, NewDeveloper};
use crate::model::profile::{Profile, ProfileId};
use crate::repo::developer_repo::DeveloperRepository;
use crate::repo::profile_repo::ProfileRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Selection id of the leading "no filter" entry in [`filter_choices`].
///
/// [`filter_choices`]: HabilitationsService::filter_choices
pub const NO_FILTER_PROFILE_ID: ProfileId = 0;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Rejected form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Named field is empty or whitespace only.
    EmptyField(&'static str),
    MissingProfile,
    EmptyPassword,
    PasswordMismatch,
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "field `{field}` must be filled"),
            Self::MissingProfile => write!(f, "a profile must be selected"),
            Self::EmptyPassword => write!(f, "both password entries must be filled"),
            Self::PasswordMismatch => write!(f, "password entries do not match"),
        }
    }
}

impl Error for FormError {}

/// Service error for administration use-cases.
#[derive(Debug)]
pub enum ServiceError {
    Form(FormError),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Add/edit form input for one developer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DeveloperForm {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub email: String,
    pub profile: Option<Profile>,
    /// Initial secret for new developers. Defaults to the last name.
    ///
    /// Ignored by edits; passwords change only through `change_password`.
    pub initial_password: Option<String>,
}

impl DeveloperForm {
    fn validate(&self) -> Result<&Profile, FormError> {
        let fields = [
            ("last_name", &self.last_name),
            ("first_name", &self.first_name),
            ("phone", &self.phone),
            ("email", &self.email),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| is_blank(value)) {
            return Err(FormError::EmptyField(*field));
        }
        self.profile.as_ref().ok_or(FormError::MissingProfile)
    }
}

impl std::fmt::Debug for DeveloperForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeveloperForm")
            .field("last_name", &self.last_name)
            .field("first_name", &self.first_name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("profile", &self.profile)
            .field(
                "initial_password",
                &self.initial_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Password reset input: the new secret typed twice.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub password: String,
    pub confirmation: String,
}

impl PasswordChange {
    pub fn new(password: impl Into<String>, confirmation: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            confirmation: confirmation.into(),
        }
    }

    fn validate(&self) -> Result<&str, FormError> {
        if self.password.is_empty() || self.confirmation.is_empty() {
            return Err(FormError::EmptyPassword);
        }
        if self.password != self.confirmation {
            return Err(FormError::PasswordMismatch);
        }
        Ok(self.password.as_str())
    }
}

impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordChange { .. }")
    }
}

/// Maps a profile picker selection to a list filter.
pub fn filter_from_selection(selected: ProfileId) -> Option<ProfileId> {
    (selected != NO_FILTER_PROFILE_ID).then_some(selected)
}

/// Use-case service wrapping developer and profile repositories.
pub struct HabilitationsService<D: DeveloperRepository, P: ProfileRepository> {
    developers: D,
    profiles: P,
}

impl<D: DeveloperRepository, P: ProfileRepository> HabilitationsService<D, P> {
    pub fn new(developers: D, profiles: P) -> Self {
        Self {
            developers,
            profiles,
        }
    }

    /// Lists developers, optionally restricted to one profile.
    pub fn list_developers(
        &self,
        profile_filter: Option<ProfileId>,
    ) -> ServiceResult<Vec<Developer>> {
        Ok(self.developers.list_developers(profile_filter)?)
    }

    pub fn list_profiles(&self) -> ServiceResult<Vec<Profile>> {
        Ok(self.profiles.list_profiles()?)
    }

    /// Returns the profiles preceded by the "no filter" entry.
    pub fn filter_choices(&self) -> ServiceResult<Vec<Profile>> {
        let mut choices = vec![Profile::new(NO_FILTER_PROFILE_ID, "")];
        choices.extend(self.profiles.list_profiles()?);
        Ok(choices)
    }

    /// Validates the form and inserts a new developer.
    ///
    /// The record id is assigned by the store; re-list to observe it.
    pub fn add_developer(&self, form: &DeveloperForm) -> ServiceResult<()> {
        let profile = form.validate()?;
        let password = form
            .initial_password
            .clone()
            .unwrap_or_else(|| form.last_name.clone());

        let developer = NewDeveloper {
            last_name: form.last_name.clone(),
            first_name: form.first_name.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            password,
            profile_id: profile.id,
        };
        self.developers.add_developer(&developer)?;
        Ok(())
    }

    /// Validates the form and rewrites the developer's fields.
    pub fn update_developer(&self, id: DeveloperId, form: &DeveloperForm) -> ServiceResult<()> {
        let profile = form.validate()?;
        let developer = Developer::new(
            id,
            form.last_name.as_str(),
            form.first_name.as_str(),
            form.phone.as_str(),
            form.email.as_str(),
            profile.clone(),
        );
        self.developers.update_developer(&developer)?;
        Ok(())
    }

    pub fn change_password(&self, id: DeveloperId, change: &PasswordChange) -> ServiceResult<()> {
        let password = change.validate()?;
        self.developers.update_password(id, password)?;
        Ok(())
    }

    pub fn delete_developer(&self, id: DeveloperId) -> ServiceResult<()> {
        Ok(self.developers.delete_developer(id)?)
    }

    /// Checks administrator credentials.
    ///
    /// Blank fields are rejected before the store is queried.
    pub fn authenticate_admin(&self, credentials: &AdminCredentials) -> ServiceResult<bool> {
        let fields = [
            ("last_name", &credentials.last_name),
            ("first_name", &credentials.first_name),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| is_blank(value)) {
            return Err(FormError::EmptyField(*field).into());
        }
        if credentials.password.is_empty() {
            return Err(FormError::EmptyPassword.into());
        }

        let granted = self.developers.authenticate_admin(credentials)?;
        if granted {
            info!("event=admin_auth module=service status=granted");
        } else {
            warn!("event=admin_auth module=service status=denied");
        }
        Ok(granted)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
