use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,                      // assigned by SQLite on insert
    pub email: String,                // unique, stored as supplied
    pub password_hash: String,        // Argon2id PHC string
    pub created_at: OffsetDateTime,   // creation timestamp
}
