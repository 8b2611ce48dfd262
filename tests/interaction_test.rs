//! Integration tests for like/comment/save interactions.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_like_by_other_user() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    app.register_user("User B", "b@x.com", "secret1").await;
    let token_a = app.login("a@x.com", "secret1").await;
    let token_b = app.login("b@x.com", "secret1").await;
    let reel_id = app.create_reel(&token_a, "likeable").await;

    let response = app
        .request(
            "POST",
            "/api/reels/likes",
            Some(serde_json::json!({ "reel_id": reel_id })),
            Some(&token_b),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["likes"].as_i64().unwrap(), 1);
    assert!(response.body["data"]["is_liked"].as_bool().unwrap());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_like_toggle_parity() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    app.register_user("User B", "b@x.com", "secret1").await;
    let token_a = app.login("a@x.com", "secret1").await;
    let token_b = app.login("b@x.com", "secret1").await;
    let reel_id = app.create_reel(&token_a, "toggled").await;

    let body = serde_json::json!({ "reel_id": reel_id });

    // Odd number of toggles: liked.
    for _ in 0..3 {
        app.request("POST", "/api/reels/likes", Some(body.clone()), Some(&token_b))
            .await;
    }
    let odd = app
        .request("POST", "/api/reels/likes", Some(body.clone()), Some(&token_b))
        .await;

    // Fourth toggle: even, back to not liked.
    assert!(!odd.body["data"]["is_liked"].as_bool().unwrap());
    assert_eq!(odd.body["data"]["likes"].as_i64().unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_unlike_removes_like() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    app.register_user("User B", "b@x.com", "secret1").await;
    let token_a = app.login("a@x.com", "secret1").await;
    let token_b = app.login("b@x.com", "secret1").await;
    let reel_id = app.create_reel(&token_a, "unliked").await;

    let body = serde_json::json!({ "reel_id": reel_id });
    app.request("POST", "/api/reels/likes", Some(body.clone()), Some(&token_b))
        .await;
    let response = app
        .request("POST", "/api/reels/likes", Some(body), Some(&token_b))
        .await;

    assert_eq!(response.body["data"]["likes"].as_i64().unwrap(), 0);
    assert!(!response.body["data"]["is_liked"].as_bool().unwrap());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_like_unknown_reel() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    let token = app.login("a@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/reels/likes",
            Some(serde_json::json!({ "reel_id": "00000000-0000-0000-0000-000000000000" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_requires_auth() {
    let app = helpers::TestApp::new_without_database();

    let response = app
        .request(
            "POST",
            "/api/reels/likes",
            Some(serde_json::json!({ "reel_id": "irrelevant" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_like_missing_reel_id() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    let token = app.login("a@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/reels/likes",
            Some(serde_json::json!({})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_comment_append_returns_full_sequence() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    app.register_user("User B", "b@x.com", "secret1").await;
    let token_a = app.login("a@x.com", "secret1").await;
    let token_b = app.login("b@x.com", "secret1").await;
    let reel_id = app.create_reel(&token_a, "discussed").await;

    app.request(
        "POST",
        "/api/reels/comment",
        Some(serde_json::json!({ "reel_id": reel_id, "text": "first!" })),
        Some(&token_b),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/reels/comment",
            Some(serde_json::json!({ "reel_id": reel_id, "text": "second" })),
            Some(&token_a),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let comments = response.body["data"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    // Insertion order is preserved.
    assert_eq!(comments[0]["text"].as_str().unwrap(), "first!");
    assert_eq!(comments[1]["text"].as_str().unwrap(), "second");
    // Authors resolve to display projections.
    assert_eq!(
        comments[0]["author"]["display_name"].as_str().unwrap(),
        "User B"
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_comment_missing_text() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    let token = app.login("a@x.com", "secret1").await;
    let reel_id = app.create_reel(&token, "quiet").await;

    let response = app
        .request(
            "POST",
            "/api/reels/comment",
            Some(serde_json::json!({ "reel_id": reel_id })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"].as_str().unwrap(),
        "Missing reelId or text"
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_save_toggle_is_involution() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    app.register_user("User B", "b@x.com", "secret1").await;
    let token_a = app.login("a@x.com", "secret1").await;
    let token_b = app.login("b@x.com", "secret1").await;
    let reel_id = app.create_reel(&token_a, "bookmarked").await;

    let body = serde_json::json!({ "reel_id": reel_id });

    let saved = app
        .request("POST", "/api/saved-reels", Some(body.clone()), Some(&token_b))
        .await;
    assert!(saved.body["data"]["saved"].as_bool().unwrap());
    assert_eq!(saved.body["data"]["total_saved"].as_i64().unwrap(), 1);

    let unsaved = app
        .request("POST", "/api/saved-reels", Some(body), Some(&token_b))
        .await;
    assert!(!unsaved.body["data"]["saved"].as_bool().unwrap());
    assert_eq!(unsaved.body["data"]["total_saved"].as_i64().unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_saved_listing() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    app.register_user("User B", "b@x.com", "secret1").await;
    let token_a = app.login("a@x.com", "secret1").await;
    let token_b = app.login("b@x.com", "secret1").await;

    let first = app.create_reel(&token_a, "saved first").await;
    let second = app.create_reel(&token_a, "saved second").await;

    app.request(
        "POST",
        "/api/saved-reels",
        Some(serde_json::json!({ "reel_id": first })),
        Some(&token_b),
    )
    .await;
    app.request(
        "POST",
        "/api/saved-reels",
        Some(serde_json::json!({ "reel_id": second })),
        Some(&token_b),
    )
    .await;

    let response = app
        .request("GET", "/api/saved-reels", None, Some(&token_b))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_saved"].as_i64().unwrap(), 2);
    let saved = response.body["data"]["saved_reels"].as_array().unwrap();
    // Most recently saved first.
    assert_eq!(saved[0]["caption"].as_str().unwrap(), "saved second");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database (REELSPRO_TEST_DATABASE_URL)"]
async fn test_save_invalid_reel_id_format() {
    let app = helpers::TestApp::new().await;
    app.register_user("User A", "a@x.com", "secret1").await;
    let token = app.login("a@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/saved-reels",
            Some(serde_json::json!({ "reel_id": "definitely-not-a-uuid" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
