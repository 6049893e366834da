use crate::domain::{AuthApi, Credentials, SessionStorage, UiEffect};
use crate::use_cases::outcome::handle_login_outcome;
use crate::use_cases::validate::validate_credentials;

// Login submission pipeline with injected dependencies.
pub struct LoginUseCase<A, S> {
    pub api: A,
    pub storage: S,
}

impl<A, S> LoginUseCase<A, S>
where
    A: AuthApi,
    S: SessionStorage,
{
    pub async fn execute(&self, credentials: Credentials) -> UiEffect {
        // Any field error stops the submission before the network.
        let errors = validate_credentials(&credentials);
        if !errors.is_empty() {
            tracing::debug!(invalid_fields = errors.len(), "login form rejected locally");
            return UiEffect::FieldErrors(errors);
        }

        let outcome = self.api.login(&credentials).await;
        handle_login_outcome(outcome, &self.storage).await
    }
}
