use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{Credentials, FormField, RegistrationInfo, ValidationErrors};

// Loose shape check for UX only; the auth service owns real address validation.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());
static NAME_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").ok());

pub const PASSWORD_MIN_LEN: usize = 8;
// A password needs at least one of these.
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_INVALID: &str =
    "Password should be at least 8 characters long and contain at least one special character";
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const FIRST_NAME_INVALID: &str = "First name should contain only letters";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const LAST_NAME_INVALID: &str = "Last name should contain only letters";

/// Checks every login field and collects all errors.
pub fn validate_credentials(credentials: &Credentials) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_email(&credentials.email, &mut errors);
    check_password(&credentials.password, &mut errors);
    errors
}

/// Checks every signup field and collects all errors.
pub fn validate_registration(info: &RegistrationInfo) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_name(
        &info.first_name,
        FormField::FirstName,
        FIRST_NAME_REQUIRED,
        FIRST_NAME_INVALID,
        &mut errors,
    );
    check_name(
        &info.last_name,
        FormField::LastName,
        LAST_NAME_REQUIRED,
        LAST_NAME_INVALID,
        &mut errors,
    );
    check_email(&info.email, &mut errors);
    check_password(&info.password, &mut errors);
    errors
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_LEN && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

fn check_email(value: &str, errors: &mut ValidationErrors) {
    if value.is_empty() {
        errors.insert(FormField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(value) {
        errors.insert(FormField::Email, EMAIL_INVALID);
    }
}

fn check_password(value: &str, errors: &mut ValidationErrors) {
    if value.is_empty() {
        errors.insert(FormField::Password, PASSWORD_REQUIRED);
    } else if !is_valid_password(value) {
        errors.insert(FormField::Password, PASSWORD_INVALID);
    }
}

fn check_name(
    value: &str,
    field: FormField,
    required: &'static str,
    invalid: &'static str,
    errors: &mut ValidationErrors,
) {
    if value.is_empty() {
        errors.insert(field, required);
    } else if !is_valid_name(value) {
        errors.insert(field, invalid);
    }
}
