//! Users as the server stores them and the signed-in visitor as the client
//! sees them.

use serde::{Deserialize, Serialize};

use crate::comment::initials;
use crate::roles::{ROLE_ADMIN, ROLE_VISITOR};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl User {
    /// "First Last", falling back to the username when both are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    pub fn role(&self) -> &'static str {
        if self.is_admin {
            ROLE_ADMIN
        } else {
            ROLE_VISITOR
        }
    }
}

/// The signed-in visitor, supplied by the authentication collaborator.
///
/// Only `email` is guaranteed; the display name comes from `name` or
/// `first_name`. The bearer token, when present, is forwarded on engagement
/// calls and never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    pub email: String,
    #[serde(skip)]
    pub access_token: Option<String>,
}

impl CurrentUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            first_name: None,
            email: email.into(),
            access_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.first_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|n| !n.is_empty())
            .unwrap_or(&self.email)
    }

    pub fn initials(&self) -> String {
        initials(self.display_name())
    }
}
