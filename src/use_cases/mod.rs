pub mod form;
pub mod login;
pub mod outcome;
pub mod session;
pub mod signup;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use form::{FormPhase, FormSession};
pub use login::LoginUseCase;
pub use session::{SESSION_TOKEN_KEY, SessionUseCase};
pub use signup::SignupUseCase;
