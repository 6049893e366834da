use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::{AuthApi, AuthOutcome, Credentials, RegistrationInfo, SessionStorage, SessionToken};

pub(crate) type StorageTable = Arc<Mutex<HashMap<String, String>>>;

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get: bool,
    pub set: bool,
    pub clear: bool,
}

// Session storage fake that lets tests inspect what the use cases wrote.
#[derive(Clone)]
pub(crate) struct RecordingStorage {
    entries: StorageTable,
    failures: FailureFlags,
    writes: Arc<AtomicUsize>,
}

impl RecordingStorage {
    pub(crate) fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_entry(&self, key: &str, value: &str) {
        let mut guard = self.entries.lock().expect("storage mutex poisoned");
        guard.insert(key.to_string(), value.to_string());
    }

    pub(crate) fn get_test_entry(&self, key: &str) -> Option<String> {
        let guard = self.entries.lock().expect("storage mutex poisoned");
        guard.get(key).cloned()
    }

    // Counts set() and clear() calls, including failed ones.
    pub(crate) fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStorage for RecordingStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.entries.lock().expect("storage mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), String> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.failures.set {
            return Err("set failed".to_string());
        }

        let mut guard = self.entries.lock().expect("storage mutex poisoned");
        guard.insert(key.to_string(), value);
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<bool, String> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.failures.clear {
            return Err("clear failed".to_string());
        }

        let mut guard = self.entries.lock().expect("storage mutex poisoned");
        Ok(guard.remove(key).is_some())
    }
}

// Auth service fake returning canned outcomes and counting calls.
#[derive(Clone)]
pub(crate) struct ScriptedAuthApi {
    login: AuthOutcome<SessionToken>,
    signup: AuthOutcome<()>,
    login_calls: Arc<AtomicUsize>,
    signup_calls: Arc<AtomicUsize>,
}

impl ScriptedAuthApi {
    pub(crate) fn new() -> Self {
        Self {
            login: AuthOutcome::Success(SessionToken::new("abc123")),
            signup: AuthOutcome::Success(()),
            login_calls: Arc::new(AtomicUsize::new(0)),
            signup_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn with_login(mut self, outcome: AuthOutcome<SessionToken>) -> Self {
        self.login = outcome;
        self
    }

    pub(crate) fn with_signup(mut self, outcome: AuthOutcome<()>) -> Self {
        self.signup = outcome;
        self
    }

    pub(crate) fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn signup_calls(&self) -> usize {
        self.signup_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthApi for ScriptedAuthApi {
    async fn login(&self, _credentials: &Credentials) -> AuthOutcome<SessionToken> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login.clone()
    }

    async fn signup(&self, _info: &RegistrationInfo) -> AuthOutcome<()> {
        self.signup_calls.fetch_add(1, Ordering::SeqCst);
        self.signup.clone()
    }
}

// Auth service fake whose login blocks until the test releases it.
#[derive(Clone)]
pub(crate) struct GatedAuthApi {
    gate: Arc<Notify>,
    login_calls: Arc<AtomicUsize>,
}

impl GatedAuthApi {
    pub(crate) fn new() -> Self {
        Self {
            gate: Arc::new(Notify::new()),
            login_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn release(&self) {
        self.gate.notify_one();
    }

    pub(crate) fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthApi for GatedAuthApi {
    async fn login(&self, _credentials: &Credentials) -> AuthOutcome<SessionToken> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        AuthOutcome::Success(SessionToken::new("abc123"))
    }

    async fn signup(&self, _info: &RegistrationInfo) -> AuthOutcome<()> {
        AuthOutcome::Success(())
    }
}

// Auth service fake that panics mid-dispatch.
#[derive(Clone, Copy)]
pub(crate) struct PanickingAuthApi;

#[async_trait]
impl AuthApi for PanickingAuthApi {
    async fn login(&self, _credentials: &Credentials) -> AuthOutcome<SessionToken> {
        panic!("login dispatch blew up");
    }

    async fn signup(&self, _info: &RegistrationInfo) -> AuthOutcome<()> {
        panic!("signup dispatch blew up");
    }
}

pub(crate) fn valid_credentials() -> Credentials {
    Credentials {
        email: "harry@hogwarts.uk".to_string(),
        password: "Alohomora!".to_string(),
    }
}

pub(crate) fn valid_registration() -> RegistrationInfo {
    RegistrationInfo {
        first_name: "Harry".to_string(),
        last_name: "Potter".to_string(),
        email: "harry@hogwarts.uk".to_string(),
        password: "Expelliarmus!".to_string(),
    }
}
