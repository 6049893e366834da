use crate::domain::{AuthApi, Credentials, RegistrationInfo, SessionStorage};
use crate::use_cases::FormSession;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub auth: Arc<dyn AuthApi>,
    pub storage: Arc<dyn SessionStorage>,
    // One form of each kind per session.
    pub login_form: Arc<Mutex<FormSession<Credentials>>>,
    pub signup_form: Arc<Mutex<FormSession<RegistrationInfo>>>,
}

impl AppState {
    pub fn new(auth: Arc<dyn AuthApi>, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            auth,
            storage,
            login_form: Arc::new(Mutex::new(FormSession::new(Credentials::default()))),
            signup_form: Arc::new(Mutex::new(FormSession::new(RegistrationInfo::default()))),
        }
    }
}
