pub mod entities;
pub mod errors;
pub mod outcome;
pub mod ports;

// Re-export the domain boundary types and ports.
pub use entities::{
    Credentials, FormField, FormFields, RegistrationInfo, SessionToken, ValidationErrors,
};
pub use errors::AuthError;
pub use outcome::{AuthOutcome, LOGIN_REJECTED, Route, SIGNUP_REJECTED, UiEffect};
pub use ports::{AuthApi, SessionStorage};
