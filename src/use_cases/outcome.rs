use crate::domain::{AuthOutcome, Route, SessionStorage, SessionToken, UiEffect};
use crate::use_cases::session::SESSION_TOKEN_KEY;

pub const SERVICE_UNREACHABLE: &str = "Could not reach the service, please try again";
pub const SESSION_NOT_SAVED: &str = "Could not save your session, please try again";

/// Maps a login outcome to its UI effect, persisting the token on success.
pub async fn handle_login_outcome<S>(outcome: AuthOutcome<SessionToken>, storage: &S) -> UiEffect
where
    S: SessionStorage + ?Sized,
{
    match outcome {
        AuthOutcome::Success(token) => {
            if let Err(err) = storage.set(SESSION_TOKEN_KEY, token.into_inner()).await {
                tracing::error!(error = %err, "failed to store session token");
                return UiEffect::ServiceError(SESSION_NOT_SAVED.to_string());
            }
            tracing::info!("login succeeded");
            UiEffect::Navigate(Route::AuthenticatedArea)
        }
        AuthOutcome::Rejected(message) => {
            tracing::info!("login rejected");
            UiEffect::Rejected(message)
        }
        AuthOutcome::TransportError(detail) => {
            tracing::error!(error = %detail, "login request failed");
            UiEffect::ServiceError(SERVICE_UNREACHABLE.to_string())
        }
    }
}

/// Maps a signup outcome to its UI effect. Signup never issues a token.
pub fn handle_signup_outcome(outcome: AuthOutcome<()>) -> UiEffect {
    match outcome {
        AuthOutcome::Success(()) => {
            tracing::info!("signup succeeded");
            UiEffect::Navigate(Route::Login)
        }
        AuthOutcome::Rejected(message) => {
            tracing::info!("signup rejected");
            UiEffect::Rejected(message)
        }
        AuthOutcome::TransportError(detail) => {
            tracing::error!(error = %detail, "signup request failed");
            UiEffect::ServiceError(SERVICE_UNREACHABLE.to_string())
        }
    }
}
