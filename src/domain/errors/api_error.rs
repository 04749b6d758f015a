//! Bills API error types.

use thiserror::Error;

/// Errors raised by the remote bills store.
///
/// `Server` deliberately renders as `Erreur {status}`: the message is
/// surfaced verbatim in the error view-state, and callers match on that
/// exact text.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("Erreur {status}")]
    Server { status: u16 },

    #[error("erreur réseau: {message}")]
    Network { message: String },

    #[error("réponse illisible: {message}")]
    Parse { message: String },

    #[error("erreur inattendue: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Creates a server error from an HTTP status code.
    #[must_use]
    pub const fn server(status: u16) -> Self {
        Self::Server { status }
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether retrying the request could succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Server { status: 500..=599 }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_is_verbatim() {
        assert_eq!(ApiError::server(404).to_string(), "Erreur 404");
        assert_eq!(ApiError::server(500).to_string(), "Erreur 500");
    }

    #[test]
    fn test_recoverability() {
        assert!(ApiError::server(500).is_recoverable());
        assert!(ApiError::network("timeout").is_recoverable());
        assert!(!ApiError::server(404).is_recoverable());
        assert!(!ApiError::parse("bad json").is_recoverable());
    }
}
