//! Principal identity used to gate journal operations

use crate::error::{MoodjError, Result};
use std::fmt;

/// Who is operating the journal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Principal {
    #[default]
    Anonymous,
    User(String),
}

impl Principal {
    /// Build a principal from an optional name; blank names are anonymous
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => Principal::User(name.to_string()),
            _ => Principal::Anonymous,
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Principal::Anonymous => f.write_str("anonymous"),
            Principal::User(name) => f.write_str(name),
        }
    }
}

/// Source of the current principal
pub trait Identity {
    fn principal(&self) -> Principal;

    fn is_authenticated(&self) -> bool {
        !matches!(self.principal(), Principal::Anonymous)
    }

    /// Fail with `Unauthorized` unless a user is logged in
    fn require_authenticated(&self) -> Result<Principal> {
        match self.principal() {
            Principal::Anonymous => Err(MoodjError::Unauthorized(
                "no user is logged in".to_string(),
            )),
            user => Ok(user),
        }
    }
}

/// Fixed identity, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Principal);

impl Identity for StaticIdentity {
    fn principal(&self) -> Principal {
        self.0.clone()
    }
}
