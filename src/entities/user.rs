//! User entity - An account shown on the admin "Users" screen.

use super::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular storefront customer
    #[default]
    User,
    /// Full back-office access
    Admin,
    /// Can manage orders only
    OrderManager,
}

impl Role {
    /// Wire name of the role
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::OrderManager => "order_manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier within the user collection
    pub id: i64,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Access role
    #[serde(default)]
    pub role: Role,
    /// Profile picture reference (URL or data URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> i64 {
        self.id
    }
}
