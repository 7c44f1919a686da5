use serde::{Deserialize, Serialize};

/// Unified error type for all Config Service operations.
///
/// Every variant carries enough context to be logged or surfaced to a user.
/// All variants are serializable for structured error reporting.
///
/// # Transport vs. rejection
///
/// - [`NetworkError`](Self::NetworkError) and [`Timeout`](Self::Timeout) mean the
///   request never produced an HTTP response.
/// - [`Rejected`](Self::Rejected) means the service answered with a non-success
///   status code.
///
/// No variant is retried automatically: every operation is a single attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum RemoteError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The request did not complete in time.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The service answered with a non-success HTTP status.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the service's response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client could not be constructed (bad endpoint URL, TLS backend failure).
    InvalidConfiguration {
        /// Details about the configuration problem.
        detail: String,
    },
}

impl RemoteError {
    /// 是否为预期行为（服务端拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { status, .. } if (400..500).contains(status))
    }

    /// Whether the request failed before any HTTP response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// HTTP status of a rejection, `None` for every other variant.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Rejected {
                status,
                raw_message,
            } => match raw_message {
                Some(msg) if !msg.is_empty() => {
                    write!(f, "Rejected by config service (HTTP {status}): {msg}")
                }
                _ => write!(f, "Rejected by config service (HTTP {status})"),
            },
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::InvalidConfiguration { detail } => {
                write!(f, "Invalid client configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for RemoteError {}

/// Convenience type alias for `Result<T, RemoteError>`.
pub type Result<T> = std::result::Result<T, RemoteError>;
