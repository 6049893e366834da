use crate::domain::{AuthError, SessionStorage, SessionToken};

// Storage key the session token lives under.
pub const SESSION_TOKEN_KEY: &str = "authToken";

// Read and end the current session with injected storage.
pub struct SessionUseCase<S> {
    pub storage: S,
}

impl<S> SessionUseCase<S>
where
    S: SessionStorage,
{
    pub async fn current(&self) -> Result<Option<SessionToken>, AuthError> {
        let token = self
            .storage
            .get(SESSION_TOKEN_KEY)
            .await
            .map_err(|_| AuthError::StorageFailure)?;

        Ok(token.map(SessionToken::new))
    }

    // Returns whether a token was present.
    pub async fn end(&self) -> Result<bool, AuthError> {
        self.storage
            .clear(SESSION_TOKEN_KEY)
            .await
            .map_err(|_| AuthError::StorageFailure)
    }
}
