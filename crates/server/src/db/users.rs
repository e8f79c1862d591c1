//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use paper_lantern_core::{Email, UserId};

use super::RepositoryError;
use crate::models::User;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the email in the database is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT id, first_name, last_name, email, is_admin, created_at
            FROM users
            WHERE email = ?
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    /// Create a new user with a pre-hashed password.
    ///
    /// The admin flag is never set here; accounts start as regular customers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        email: &Email,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query(
            r"
            INSERT INTO users (first_name, last_name, email, password_hash)
            VALUES (?, ?, ?, ?)
            RETURNING id, first_name, last_name, email, is_admin, created_at
            ",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email.as_str())
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        map_user(&row)
    }

    /// Get a user together with their password hash by email.
    ///
    /// Returns `None` if the user doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_password(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT id, first_name, last_name, email, is_admin, created_at, password_hash
            FROM users
            WHERE email = ?
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let password_hash: String = r.try_get("password_hash")?;
        let user = map_user(&r)?;

        Ok(Some((user, password_hash)))
    }

    /// Set or clear the admin flag for an existing account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_admin(&self, email: &Email, is_admin: bool) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE users SET is_admin = ? WHERE email = ?")
            .bind(is_admin)
            .bind(email.as_str())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Map a database row onto the `User` model.
fn map_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    let email: String = row.try_get("email")?;
    let email = Email::parse(&email)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid email in database: {e}")))?;

    Ok(User {
        id: UserId::new(row.try_get("id")?),
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email,
        is_admin: row.try_get("is_admin")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}
