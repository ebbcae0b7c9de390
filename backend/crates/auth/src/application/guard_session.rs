//! Guard Session Use Case
//!
//! Decides what happens to a request for a protected page, given the
//! credentials it carries.
//!
//! 1. Access token present: let it through. Its expiry is not checked
//!    here; a stale token is discovered by the API itself.
//! 2. Neither token: send the user to the login page.
//! 3. Only a refresh token: one renewal call. A new access token lets the
//!    request through and is handed back for the response cookie; any
//!    failure sends the user to the login page.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::renewal::RenewalOutcome;
use crate::domain::remote::TokenRenewer;
use crate::domain::value_object::{AccessToken, RefreshToken};

/// Why a request was sent to the login page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardRejection {
    NoCredentials,
    RenewalRejected { status: u16, detail: Option<String> },
    RenewalTransportFailure(String),
}

impl GuardRejection {
    /// Short label for log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardRejection::NoCredentials => "no_credentials",
            GuardRejection::RenewalRejected { .. } => "renewal_rejected",
            GuardRejection::RenewalTransportFailure(_) => "renewal_transport_failure",
        }
    }
}

/// What the middleware should do with the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Forward untouched
    Proceed,
    /// Forward, then set the access token cookie on the response
    ProceedWithRenewed(AccessToken),
    /// Redirect to `location`; the reason only feeds logs
    RedirectToLogin {
        location: String,
        reason: GuardRejection,
    },
}

/// Guard session use case
pub struct GuardSessionUseCase<R>
where
    R: TokenRenewer,
{
    renewer: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> GuardSessionUseCase<R>
where
    R: TokenRenewer,
{
    pub fn new(renewer: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { renewer, config }
    }

    /// Decide for a request to `path`
    ///
    /// At most one renewal call is made. The refresh token is only read.
    pub async fn execute(
        &self,
        access_token: Option<AccessToken>,
        refresh_token: Option<RefreshToken>,
        path: &str,
    ) -> GuardDecision {
        if access_token.is_some() {
            return GuardDecision::Proceed;
        }

        let Some(refresh_token) = refresh_token else {
            return self.redirect(path, GuardRejection::NoCredentials);
        };

        match self.renewer.renew(&refresh_token).await {
            RenewalOutcome::Renewed(token) => GuardDecision::ProceedWithRenewed(token),
            RenewalOutcome::Rejected { status, detail } => {
                self.redirect(path, GuardRejection::RenewalRejected { status, detail })
            }
            RenewalOutcome::TransportFailure(reason) => {
                self.redirect(path, GuardRejection::RenewalTransportFailure(reason))
            }
        }
    }

    fn redirect(&self, path: &str, reason: GuardRejection) -> GuardDecision {
        GuardDecision::RedirectToLogin {
            location: platform::redirect::login_location(&self.config.login_path, path),
            reason,
        }
    }
}
