use std::fmt;

/// Wire-level ticket as decoded from the remote payload.
///
/// Every field is optional: a record missing or mistyping a field still loads,
/// and the gaps are resolved downstream (sentinel column, fallback label).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicketRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub user: Option<String>,
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

// The message text is what the failed board surfaces verbatim.
impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport-level failure; the request never produced a response.
    Network,
    /// The endpoint answered with a non-success status code.
    HttpStatus(u16),
    /// The response body did not normalize into a ticket list.
    Shape,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Shape => write!(f, "unexpected payload shape"),
        }
    }
}
