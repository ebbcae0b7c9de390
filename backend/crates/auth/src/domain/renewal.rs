//! Credential Renewal
//!
//! Outcome of exchanging a refresh token for a new access token. The
//! rejected and transport-failure branches are separate variants so callers
//! match on them explicitly instead of folding both into one error path.

use crate::domain::value_object::AccessToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenewalOutcome {
    /// The API issued a new access token
    Renewed(AccessToken),
    /// The API answered with a non-success status
    Rejected {
        status: u16,
        /// `detail` from the error body, for logs only
        detail: Option<String>,
    },
    /// No usable answer: connection error or an unreadable success body
    TransportFailure(String),
}
