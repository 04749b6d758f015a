//! Client session storage port definition.

use async_trait::async_trait;

use crate::domain::entities::UserSession;

/// Port for reading the persisted current-user record.
///
/// Read-only from the bills feature's perspective; the record is written
/// once at login. Storage failures degrade to `None` rather than erroring,
/// so a missing or corrupt session never breaks the screen.
#[async_trait]
pub trait SessionPort: Send + Sync {
    /// Returns the connected user, or `None` when no session is available.
    async fn current_user(&self) -> Option<UserSession>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Mock session storage for testing.
    pub struct MockSessionPort {
        session: Option<UserSession>,
    }

    impl MockSessionPort {
        /// Creates a mock with a connected employee.
        pub fn employee(email: &str) -> Self {
            Self {
                session: Some(UserSession::employee(email)),
            }
        }

        /// Creates a mock with no session.
        pub fn empty() -> Self {
            Self { session: None }
        }
    }

    #[async_trait]
    impl SessionPort for MockSessionPort {
        async fn current_user(&self) -> Option<UserSession> {
            self.session.clone()
        }
    }
}
