use crate::auth::{policy::DomainPolicy, services::CredentialStore};
use crate::config::AppConfig;
use crate::db;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: CredentialStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Prepares the database and wires the credential store. Fails if the
    /// store cannot be made ready.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);
        let db = db::ensure_ready(&config.database).await?;
        let policy = DomainPolicy::new(&config.allowed_email_suffix);
        Ok(Self {
            store: CredentialStore::new(db, policy),
            config,
        })
    }
}

impl FromRef<AppState> for CredentialStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
