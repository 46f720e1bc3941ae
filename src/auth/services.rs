use sqlx::SqlitePool;
use tracing::{debug, info, instrument, warn};

use crate::{
    auth::{
        password,
        policy::DomainPolicy,
        repo_types::User,
    },
    error::AuthError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registered {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticated {
    pub id: i64,
}

/// Sole owner of user records. Cheap to clone; every clone shares the pool.
#[derive(Clone)]
pub struct CredentialStore {
    db: SqlitePool,
    policy: DomainPolicy,
}

impl CredentialStore {
    pub fn new(db: SqlitePool, policy: DomainPolicy) -> Self {
        Self { db, policy }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db
    }

    /// Creates a user. The existence check is only a fast path: the UNIQUE
    /// constraint on insert decides the outcome under concurrent registration.
    #[instrument(skip(self, password))]
    pub async fn register_user(&self, email: &str, password: &str) -> Result<Registered, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        if !self.policy.allows(email) {
            debug!(%email, suffix = self.policy.suffix(), "email outside institutional domain");
            return Err(AuthError::DomainRejected);
        }

        if User::find_by_email(&self.db, email).await?.is_some() {
            info!(%email, "email already registered");
            return Err(AuthError::DuplicateEmail);
        }

        let hash = password::hash(password.to_owned()).await?;

        match User::create(&self.db, email, &hash).await {
            Ok(id) => {
                info!(user_id = id, %email, "user registered");
                Ok(Registered { id })
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                info!(%email, "email registered concurrently");
                Err(AuthError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Unknown email and wrong password both yield `InvalidCredentials`.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Authenticated, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        let Some(user) = User::find_by_email(&self.db, email).await? else {
            warn!(%email, "login unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !password::verify(password.to_owned(), user.password_hash).await? {
            warn!(%email, user_id = user.id, "login invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = user.id, %email, "user logged in");
        Ok(Authenticated { id: user.id })
    }
}
