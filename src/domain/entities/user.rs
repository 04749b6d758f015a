//! Current-user session entities.

use serde::{Deserialize, Serialize};

/// Role of the connected user, deciding which screen variant is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserType {
    /// Regular employee submitting bills.
    #[default]
    Employee,
    /// Back-office administrator.
    Admin,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Employee => write!(f, "Employee"),
            Self::Admin => write!(f, "Admin"),
        }
    }
}

/// The serialized current-user record held in client storage.
///
/// Written once at login and read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSession {
    /// Role of the connected user.
    #[serde(rename = "type", default)]
    pub user_type: UserType,
    /// Email the user logged in with.
    #[serde(default)]
    pub email: String,
}

impl UserSession {
    /// Creates a session record for an employee.
    #[must_use]
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }
}
