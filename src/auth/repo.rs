use crate::auth::repo_types::User;
use sqlx::SqlitePool;
use time::OffsetDateTime;

impl User {
    /// Find a user by email, compared exactly as stored.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user and return its id. A duplicate email surfaces as a
    /// database error whose `is_unique_violation()` is true.
    ///
    /// Runs through `execute` so the statement completes and commits before
    /// the connection goes back to the pool.
    pub async fn create(db: &SqlitePool, email: &str, password_hash: &str) -> Result<i64, sqlx::Error> {
        let done = sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(OffsetDateTime::now_utc())
        .execute(db)
        .await?;
        Ok(done.last_insert_rowid())
    }

    pub async fn count_by_email(db: &SqlitePool, email: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(db)
            .await?;
        Ok(count)
    }
}
