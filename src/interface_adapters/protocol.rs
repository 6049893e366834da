use serde::{Deserialize, Serialize};

use crate::domain::{FormField, ValidationErrors};
use crate::use_cases::FormPhase;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

// A single keystroke-level change to one form input.
#[derive(Deserialize)]
pub struct FieldEditRequest {
    pub field: FormField,
    pub value: String,
}

// Entered values echoed back so the client can re-render without retyping.
// Passwords are never echoed.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
}

#[derive(Serialize)]
pub struct FormResponse {
    pub phase: FormPhase,
    pub errors: ValidationErrors,
    pub message: Option<String>,
    pub redirect: Option<&'static str>,
    pub values: FormValues,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
}

#[derive(Serialize)]
pub struct EndSessionResponse {
    pub revoked: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
