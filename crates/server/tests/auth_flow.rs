//! Registration and login behavior.

mod common;

use paper_lantern_server::services::auth::{AuthError, AuthService};

#[tokio::test]
async fn register_then_login() {
    let pool = common::test_pool().await;
    let auth = AuthService::new(&pool);

    let user = auth
        .register("Ada", "Lovelace", "ada@example.com", "correct horse")
        .await
        .expect("registration failed");
    assert_eq!(user.first_name, "Ada");
    assert!(!user.is_admin, "new accounts must not be admin");

    let logged_in = auth
        .login("ada@example.com", "correct horse")
        .await
        .expect("login failed");
    assert_eq!(logged_in.id, user.id);
}

#[tokio::test]
async fn login_is_case_insensitive_on_email() {
    let pool = common::test_pool().await;
    let auth = AuthService::new(&pool);

    auth.register("Ada", "Lovelace", "Ada@Example.com", "correct horse")
        .await
        .expect("registration failed");

    assert!(auth.login("ada@example.com", "correct horse").await.is_ok());
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let pool = common::test_pool().await;
    let auth = AuthService::new(&pool);

    auth.register("Ada", "Lovelace", "ada@example.com", "correct horse")
        .await
        .expect("first registration failed");

    let second = auth
        .register("Grace", "Hopper", "ada@example.com", "another pass")
        .await;
    assert!(matches!(second, Err(AuthError::EmailTaken)));
}

#[tokio::test]
async fn wrong_password_and_unknown_email_fail_identically() {
    let pool = common::test_pool().await;
    let auth = AuthService::new(&pool);

    auth.register("Ada", "Lovelace", "ada@example.com", "correct horse")
        .await
        .expect("registration failed");

    let wrong_password = auth.login("ada@example.com", "wrong").await;
    let unknown_email = auth.login("nobody@example.com", "correct horse").await;

    assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(AuthError::InvalidCredentials)));

    // Same user-visible message for both, so account existence can't be probed
    assert_eq!(
        wrong_password.unwrap_err().to_string(),
        unknown_email.unwrap_err().to_string()
    );
}

#[tokio::test]
async fn registration_validates_required_fields() {
    let pool = common::test_pool().await;
    let auth = AuthService::new(&pool);

    assert!(matches!(
        auth.register("", "Lovelace", "ada@example.com", "correct horse")
            .await,
        Err(AuthError::MissingField("firstName"))
    ));
    assert!(matches!(
        auth.register("Ada", "  ", "ada@example.com", "correct horse")
            .await,
        Err(AuthError::MissingField("lastName"))
    ));
    assert!(matches!(
        auth.register("Ada", "Lovelace", "not-an-email", "correct horse")
            .await,
        Err(AuthError::InvalidEmail(_))
    ));
    assert!(matches!(
        auth.register("Ada", "Lovelace", "ada@example.com", "short")
            .await,
        Err(AuthError::WeakPassword(_))
    ));
}
