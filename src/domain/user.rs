use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};

pub type UserId = u32;

const MAX_NAME_LEN: usize = 64;

/// An account holder.
///
/// Immutable once constructed. Accounts carry a copy of their holder's
/// record; the record itself is owned and managed outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Validates the contact details and builds the user.
    ///
    /// The name is informational only but bounded in length; the email must
    /// be syntactically plausible since it is the delivery address for
    /// threshold alerts.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.chars().count() > MAX_NAME_LEN {
            return Err(LedgerError::ValidationError(format!(
                "name longer than {MAX_NAME_LEN} characters"
            )));
        }

        let email = email.into();
        if !is_valid_email(&email) {
            return Err(LedgerError::ValidationError(format!(
                "malformed email address: {email:?}"
            )));
        }

        Ok(Self { id, name, email })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// Syntactic check only: a single `@` separating non-empty parts.
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}
