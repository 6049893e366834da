use crate::domain::entities::ValidationErrors;

// Deliberately generic so a rejection never reveals whether the account exists.
pub const LOGIN_REJECTED: &str = "Email or password is incorrect";
pub const SIGNUP_REJECTED: &str = "Registration could not be completed, please try again";

// Classified result of one auth network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome<T> {
    Success(T),
    // Round trip completed but the service refused the submission.
    Rejected(String),
    // The request never produced a usable response.
    TransportError(String),
}

// Destinations the presentation layer can be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AuthenticatedArea,
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::AuthenticatedArea => "/setting",
            Route::Login => "/login",
        }
    }
}

/// What the form should do after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    FieldErrors(ValidationErrors),
    Navigate(Route),
    // Stay on the form with entered values kept and show the message.
    Rejected(String),
    ServiceError(String),
}
