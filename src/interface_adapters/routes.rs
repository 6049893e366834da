use crate::interface_adapters::handlers::{
    current_session, edit_login_field, edit_signup_field, end_session, login, signup,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

pub fn app(state: AppState) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/login/fields", patch(edit_login_field))
        .route("/signup/fields", patch(edit_signup_field))
        .route("/session", get(current_session).delete(end_session))
        .with_state(state)
}
