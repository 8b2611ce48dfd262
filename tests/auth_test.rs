//! Integration tests for registration and login.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_register_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "User A",
                "email": "a@x.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["email"].as_str().unwrap(), "a@x.com");
    assert!(response.body["data"]["id"].is_string());
    // The hash must never leak into a response.
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_register_duplicate_email_rejected() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Impostor",
                "email": "A@X.Com",
                "password": "secret2",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"].as_str().unwrap(),
        "User already exists with this email"
    );
}

#[tokio::test]
async fn test_register_short_password_rejected() {
    let app = helpers::TestApp::new_without_database();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "User A",
                "email": "a@x.com",
                "password": "short",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_invalid_email_rejected() {
    let app = helpers::TestApp::new_without_database();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "User A",
                "email": "not-an-email",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "a@x.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
    assert_eq!(
        response.body["data"]["user"]["email"].as_str().unwrap(),
        "a@x.com"
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "a@x.com",
                "password": "wrongpass",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@x.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    let token = app.login("a@x.com", "secret1").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"].as_str().unwrap(), "a@x.com");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_oauth_upsert_reuses_existing_account() {
    use std::sync::Arc;

    let app = helpers::TestApp::new().await;

    let auth_config = reelspro_core::config::AuthConfig::default();
    let user_repo = Arc::new(reelspro_database::repositories::UserRepository::new(
        app.db_pool.clone(),
    ));
    let service = reelspro_service::user::UserService::new(
        user_repo,
        Arc::new(reelspro_auth::password::PasswordHasher::new()),
        Arc::new(reelspro_auth::password::PasswordValidator::new(&auth_config)),
    );

    let first = service
        .upsert_oauth_user(
            "oauth@x.com",
            Some("OAuth User".to_string()),
            Some("https://cdn.example.com/a/oauth.jpg".to_string()),
            Some("google-12345".to_string()),
        )
        .await
        .unwrap();

    // Second sign-in with a differently-cased email reuses the account.
    let second = service
        .upsert_oauth_user("OAuth@X.Com", None, None, None)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert!(first.password_hash.is_none());
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let app = helpers::TestApp::new_without_database();

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_garbage_token() {
    let app = helpers::TestApp::new_without_database();

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
