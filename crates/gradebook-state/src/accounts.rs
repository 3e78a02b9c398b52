//! Sign-up, login and logout.
//!
//! A successful login yields a [`Session`], an explicit value the caller
//! passes to every operation that acts on behalf of a student. There is no
//! process-wide "current user". `Session` can only be built here, so
//! holding one means the credentials were checked.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use gradebook_core::AdmissionMode;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::credentials::{PasswordDigest, DEFAULT_DIGEST_ROUNDS};
use crate::error::StorageError;
use crate::schema::{normalize_email, NewStudent, StudentId, StudentProfile};
use crate::storage_traits::{StorageResult, StudentStore};

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Sign-up form fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub admission_mode: AdmissionMode,
}

impl SignupForm {
    /// Field-level validation. Returns the first problem found.
    pub fn validate(&self) -> StorageResult<()> {
        if self.first_name.trim().is_empty() {
            return Err(StorageError::InvalidInput("first name is required".into()));
        }
        if self.last_name.trim().is_empty() {
            return Err(StorageError::InvalidInput("last name is required".into()));
        }
        if !looks_like_email(&self.email) {
            return Err(StorageError::InvalidInput(format!(
                "'{}' is not a valid email address",
                self.email.trim()
            )));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(StorageError::InvalidInput(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.password != self.confirm_password {
            return Err(StorageError::InvalidInput("passwords do not match".into()));
        }
        Ok(())
    }
}

fn looks_like_email(raw: &str) -> bool {
    let email = raw.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
            .unwrap_or(false)
}

/// Proof of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    student_id: StudentId,
    email: String,
    token: String,
    issued_at: DateTime<Utc>,
}

impl Session {
    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Random per-login token, useful for correlating log lines.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Account operations over a [`StudentStore`].
pub struct Accounts<S> {
    store: Arc<S>,
    digest_rounds: u32,
}

impl<S> Accounts<S>
where
    S: StudentStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            digest_rounds: DEFAULT_DIGEST_ROUNDS,
        }
    }

    /// Override the password digest rounds used for new accounts.
    pub fn with_digest_rounds(mut self, rounds: u32) -> Self {
        self.digest_rounds = rounds;
        self
    }

    /// Validate the form and create the account.
    pub async fn signup(&self, form: SignupForm) -> StorageResult<StudentProfile> {
        form.validate()?;
        let record = self
            .store
            .create_student(NewStudent {
                first_name: form.first_name.trim().to_string(),
                last_name: form.last_name.trim().to_string(),
                email: normalize_email(&form.email),
                password: PasswordDigest::create(&form.password, self.digest_rounds),
                admission_mode: form.admission_mode,
            })
            .await?;
        info!(student_id = %record.id, "student signed up");
        Ok(record.profile())
    }

    /// Check credentials and open a session.
    ///
    /// An unknown email and a wrong password fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> StorageResult<Session> {
        let Some(record) = self.store.find_by_email(email).await? else {
            warn!("login failed: unknown email");
            return Err(StorageError::InvalidCredentials);
        };
        if !record.password.verify(password) {
            warn!(student_id = %record.id, "login failed: wrong password");
            return Err(StorageError::InvalidCredentials);
        }

        let session = Session {
            student_id: record.id,
            email: record.email,
            token: uuid::Uuid::new_v4().to_string(),
            issued_at: Utc::now(),
        };
        info!(student_id = %session.student_id, token = %session.token, "login succeeded");
        Ok(session)
    }

    /// End a session. Consumes it so it cannot be used afterwards.
    pub fn logout(&self, session: Session) {
        info!(student_id = %session.student_id, token = %session.token, "logged out");
    }
}
