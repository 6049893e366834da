use std::{env, time::Duration};

// Runtime settings read from the environment (a local .env is loaded first).

pub fn http_port() -> u16 {
    parse_or(env::var("PORTAL_PORT").ok(), 3000)
}

pub fn auth_service_url() -> String {
    env::var("AUTH_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

// Upper bound on one auth round trip, so a form never stays in Submitting forever.
pub fn auth_request_timeout() -> Duration {
    Duration::from_millis(parse_or(env::var("AUTH_REQUEST_TIMEOUT_MS").ok(), 10_000))
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
