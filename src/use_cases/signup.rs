use crate::domain::{AuthApi, RegistrationInfo, UiEffect};
use crate::use_cases::outcome::handle_signup_outcome;
use crate::use_cases::validate::validate_registration;

// Signup submission pipeline; no storage, signup never issues a token.
pub struct SignupUseCase<A> {
    pub api: A,
}

impl<A> SignupUseCase<A>
where
    A: AuthApi,
{
    pub async fn execute(&self, info: RegistrationInfo) -> UiEffect {
        let errors = validate_registration(&info);
        if !errors.is_empty() {
            tracing::debug!(invalid_fields = errors.len(), "signup form rejected locally");
            return UiEffect::FieldErrors(errors);
        }

        let outcome = self.api.signup(&info).await;
        handle_signup_outcome(outcome)
    }
}
