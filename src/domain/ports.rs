use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{Credentials, RegistrationInfo, SessionToken};
use crate::domain::outcome::AuthOutcome;

// The use cases depend on these traits, not on the concrete adapters.
// Dependencies point inwards to the domain layer.

/// Remote authentication service. Each call yields exactly one outcome.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> AuthOutcome<SessionToken>;
    async fn signup(&self, info: &RegistrationInfo) -> AuthOutcome<()>;
}

/// Key/value storage scoped to the current session.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
    async fn set(&self, key: &str, value: String) -> Result<(), String>;
    async fn clear(&self, key: &str) -> Result<bool, String>;
}

#[async_trait]
impl<T: AuthApi + ?Sized> AuthApi for Arc<T> {
    async fn login(&self, credentials: &Credentials) -> AuthOutcome<SessionToken> {
        (**self).login(credentials).await
    }

    async fn signup(&self, info: &RegistrationInfo) -> AuthOutcome<()> {
        (**self).signup(info).await
    }
}

#[async_trait]
impl<T: SessionStorage + ?Sized> SessionStorage for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), String> {
        (**self).set(key, value).await
    }

    async fn clear(&self, key: &str) -> Result<bool, String> {
        (**self).clear(key).await
    }
}
