use crate::domain::{AuthProvider, CatalogProvider};
use crate::use_cases::LoginPolicy;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub catalog: Arc<dyn CatalogProvider>,
    pub auth: Arc<dyn AuthProvider>,
    pub login_policy: LoginPolicy,
}
