//! Admin account management.
//!
//! Creates a new admin account, or promotes an existing account to admin if
//! the email is already registered (the existing password is kept in that
//! case).

use rand::Rng;
use rand::distr::Alphanumeric;

use paper_lantern_core::Email;
use paper_lantern_server::db::users::UserRepository;
use paper_lantern_server::db::{self, RepositoryError};
use paper_lantern_server::services::auth::hash_password;

/// Length of generated admin passwords.
const GENERATED_PASSWORD_LENGTH: usize = 24;

/// Create or promote an admin account.
///
/// # Errors
///
/// Returns an error if the email is invalid or a database operation fails.
pub async fn create_user(
    email: &str,
    first_name: &str,
    last_name: &str,
    password: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = Email::parse(email)?;

    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await?;
    let users = UserRepository::new(&pool);

    let generated;
    let password = match password {
        Some(password) => password,
        None => {
            generated = generate_password();
            #[allow(clippy::print_stdout)]
            {
                println!("Generated password: {generated}");
            }
            generated.as_str()
        }
    };

    let password_hash = hash_password(password)?;

    match users
        .create(first_name, last_name, &email, &password_hash)
        .await
    {
        Ok(user) => tracing::info!(user_id = %user.id, "admin account created"),
        Err(RepositoryError::Conflict(_)) => {
            tracing::info!(email = %email, "account already exists, promoting to admin");
        }
        Err(e) => return Err(e.into()),
    }

    users.set_admin(&email, true).await?;
    tracing::info!(email = %email, "admin flag set");

    Ok(())
}

/// Generate a random alphanumeric password.
fn generate_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}
