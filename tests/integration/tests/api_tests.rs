//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chirpy_common::JwtService;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, production_test_config, TestServer,
    TEST_JWT_SECRET, TEST_POLKA_KEY,
};
use reqwest::StatusCode;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/healthz").await.expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();

    let response = server.post("/api/users", &signup).await.unwrap();
    let user: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.email, signup.email);
    assert!(!user.is_chirpy_red);
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();

    // First signup
    server.post("/api/users", &signup).await.unwrap();

    // Second signup with same email
    let response = server.post("/api/users", &signup).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();

    assert_eq!(error.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest {
        email: "not-an-email".to_string(),
        password: "long enough password".to_string(),
    };

    let response = server.post("/api/users", &signup).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_short_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest {
        email: format!("short{}@example.com", unique_suffix()),
        password: "2short".to_string(),
    };

    let response = server.post("/api/users", &signup).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_user_response_never_carries_password_material() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();

    let response = server.post("/api/users", &signup).await.unwrap();
    let value: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    let fields = value.as_object().unwrap();
    assert_eq!(fields.len(), 5);
    for key in ["id", "email", "is_chirpy_red", "created_at", "updated_at"] {
        assert!(fields.contains_key(key), "missing field {key}");
    }
    assert!(!fields.keys().any(|k| k.contains("password")));
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Sign up first
    let signup = SignupRequest::unique();
    let response = server.post("/api/users", &signup).await.unwrap();
    let user: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Login
    let login_req = LoginRequest::from_signup(&signup);
    let response = server.post("/api/login", &login_req).await.unwrap();
    let login: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(login.id, user.id);
    assert_eq!(login.email, signup.email);
    assert!(!login.token.is_empty());
    assert_eq!(login.refresh_token.len(), 64);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    server.post("/api/users", &signup).await.unwrap();

    // Wrong password for a real account
    let wrong_password = LoginRequest {
        email: signup.email.clone(),
        password: "not the password".to_string(),
    };
    let response = server.post("/api/login", &wrong_password).await.unwrap();
    let first: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Account that does not exist
    let unknown_email = LoginRequest {
        email: format!("missing{}@example.com", unique_suffix()),
        password: "not the password".to_string(),
    };
    let response = server.post("/api/login", &unknown_email).await.unwrap();
    let second: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Neither response may reveal whether the account exists
    assert_eq!(first.error.code, "INVALID_CREDENTIALS");
    assert_eq!(first.error.code, second.error.code);
    assert_eq!(first.error.message, second.error.message);
}

#[tokio::test]
async fn test_login_issues_independent_refresh_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    server.post("/api/users", &signup).await.unwrap();
    let login_req = LoginRequest::from_signup(&signup);

    // Two logins, e.g. two devices
    let response = server.post("/api/login", &login_req).await.unwrap();
    let first: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.post("/api/login", &login_req).await.unwrap();
    let second: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);

    // Both sessions stay usable
    let response = server
        .post_bearer("/api/refresh", &first.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_bearer("/api/refresh", &second.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Refresh Token Tests
// ============================================================================

#[tokio::test]
async fn test_refresh_returns_working_access_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    server.post("/api/users", &signup).await.unwrap();
    let response = server
        .post("/api/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    let login: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();

    // Exchange the refresh token
    let response = server
        .post_bearer("/api/refresh", &login.refresh_token)
        .await
        .unwrap();
    let refreshed: TokenBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.token.is_empty());

    // The new access token must be accepted by a protected endpoint
    let response = server
        .post_auth("/api/chirps", &refreshed.token, &ChirpRequest::text("hello"))
        .await
        .unwrap();
    let chirp: ChirpBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(chirp.user_id, login.id);
}

#[tokio::test]
async fn test_refresh_unknown_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_bearer("/api/refresh", "definitely-not-a-refresh-token")
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(error.error.code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_refresh_tampered_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    server.post("/api/users", &signup).await.unwrap();
    let response = server
        .post("/api/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    let login: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();

    // Flip the first character so length and alphabet stay plausible
    let token = &login.refresh_token;
    let tampered = if token.starts_with('a') {
        format!("b{}", &token[1..])
    } else {
        format!("a{}", &token[1..])
    };

    let response = server.post_bearer("/api/refresh", &tampered).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_requires_authorization_header() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/refresh", &()).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");
}

// ============================================================================
// Revoke Tests
// ============================================================================

#[tokio::test]
async fn test_revoke_then_refresh() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    server.post("/api/users", &signup).await.unwrap();
    let response = server
        .post("/api/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    let login: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();

    // Revoke
    let response = server
        .post_bearer("/api/revoke", &login.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Refresh must now fail
    let response = server
        .post_bearer("/api/refresh", &login.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Revoking again is a no-op, not an error
    let response = server
        .post_bearer("/api/revoke", &login.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_revoke_unknown_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_bearer("/api/revoke", "never-issued-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Access Token Tests
// ============================================================================

#[tokio::test]
async fn test_chirps_require_authorization() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/chirps", &ChirpRequest::text("anonymous"))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_expired_access_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    let response = server.post("/api/users", &signup).await.unwrap();
    let user: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Mint a token that expired ten seconds ago
    let jwt = JwtService::new(TEST_JWT_SECRET, 3600);
    let expired = jwt.issue_access_token_with_expiry(user.id, -10).unwrap();

    let response = server
        .post_auth("/api/chirps", &expired, &ChirpRequest::text("too late"))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(error.error.code, "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_foreign_signature_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    let response = server.post("/api/users", &signup).await.unwrap();
    let user: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Well-formed token signed with the wrong secret
    let jwt = JwtService::new("some-other-secret", 3600);
    let forged = jwt.issue_access_token(user.id).unwrap();

    let response = server
        .post_auth("/api/chirps", &forged, &ChirpRequest::text("forged"))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(error.error.code, "INVALID_SIGNATURE");
}

// ============================================================================
// Chirp Tests
// ============================================================================

/// Sign up a fresh user, log in, and return the session
async fn login_fresh_user(server: &TestServer) -> LoginBody {
    let signup = SignupRequest::unique();
    server.post("/api/users", &signup).await.unwrap();
    let response = server
        .post("/api/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

#[tokio::test]
async fn test_create_chirp() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = login_fresh_user(&server).await;

    let response = server
        .post_auth(
            "/api/chirps",
            &login.token,
            &ChirpRequest::text("I'm the one who knocks!"),
        )
        .await
        .unwrap();
    let chirp: ChirpBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(chirp.body, "I'm the one who knocks!");
    assert_eq!(chirp.user_id, login.id);
}

#[tokio::test]
async fn test_chirp_length_limit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = login_fresh_user(&server).await;

    // One past the limit
    let response = server
        .post_auth(
            "/api/chirps",
            &login.token,
            &ChirpRequest::text(&"a".repeat(141)),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "CHIRP_TOO_LONG");

    // Exactly at the limit
    let response = server
        .post_auth(
            "/api/chirps",
            &login.token,
            &ChirpRequest::text(&"a".repeat(140)),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_empty_chirp_allowed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = login_fresh_user(&server).await;

    let response = server
        .post_auth("/api/chirps", &login.token, &ChirpRequest::text(""))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_chirp_profanity_filtered() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = login_fresh_user(&server).await;

    let response = server
        .post_auth(
            "/api/chirps",
            &login.token,
            &ChirpRequest::text("This is a kerfuffle opinion I need to share with the world"),
        )
        .await
        .unwrap();
    let chirp: ChirpBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(
        chirp.body,
        "This is a **** opinion I need to share with the world"
    );

    // Punctuation breaks the whole-token match
    let response = server
        .post_auth("/api/chirps", &login.token, &ChirpRequest::text("Sharbert!"))
        .await
        .unwrap();
    let chirp: ChirpBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(chirp.body, "Sharbert!");
}

#[tokio::test]
async fn test_list_chirps_oldest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = login_fresh_user(&server).await;

    let mut created = Vec::new();
    for text in ["first chirp", "second chirp", "third chirp"] {
        let response = server
            .post_auth("/api/chirps", &login.token, &ChirpRequest::text(text))
            .await
            .unwrap();
        let chirp: ChirpBody = assert_json(response, StatusCode::CREATED).await.unwrap();
        created.push(chirp.id);
    }

    // The listing is public and shared, so only compare this user's chirps
    let response = server.get("/api/chirps").await.unwrap();
    let chirps: Vec<ChirpBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let mine: Vec<Uuid> = chirps
        .iter()
        .filter(|c| c.user_id == login.id)
        .map(|c| c.id)
        .collect();
    assert_eq!(mine, created);
}

#[tokio::test]
async fn test_get_chirp() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = login_fresh_user(&server).await;

    let response = server
        .post_auth("/api/chirps", &login.token, &ChirpRequest::text("findable"))
        .await
        .unwrap();
    let created: ChirpBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/chirps/{}", created.id))
        .await
        .unwrap();
    let chirp: ChirpBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(chirp.id, created.id);
    assert_eq!(chirp.body, "findable");
}

#[tokio::test]
async fn test_get_chirp_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/api/chirps/{}", Uuid::new_v4()))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.error.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_get_chirp_invalid_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/chirps/not-a-uuid").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(error.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_delete_chirp_author_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = login_fresh_user(&server).await;
    let intruder = login_fresh_user(&server).await;

    let response = server
        .post_auth("/api/chirps", &author.token, &ChirpRequest::text("mine"))
        .await
        .unwrap();
    let chirp: ChirpBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/chirps/{}", chirp.id);

    // Someone else may not delete it
    let response = server.delete_auth(&path, &intruder.token).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_CHIRP_AUTHOR");

    // Still there
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The author may
    let response = server.delete_auth(&path, &author.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone now, for reads and repeat deletes alike
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete_auth(&path, &author.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Credential Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    server.post("/api/users", &signup).await.unwrap();
    let response = server
        .post("/api/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    let login: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();

    // Change both email and password
    let new_creds = SignupRequest::unique();
    let response = server
        .put_auth("/api/users", &login.token, &new_creds)
        .await
        .unwrap();
    let updated: UserBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.id, login.id);
    assert_eq!(updated.email, new_creds.email);

    // New credentials work
    let response = server
        .post("/api/login", &LoginRequest::from_signup(&new_creds))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Old password does not
    let stale = LoginRequest {
        email: new_creds.email.clone(),
        password: signup.password.clone(),
    };
    let response = server.post("/api/login", &stale).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_credentials_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .client
        .put(format!("{}/api/users", server.base_url()))
        .json(&SignupRequest::unique())
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Polka Webhook Tests
// ============================================================================

#[tokio::test]
async fn test_webhook_upgrades_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    let response = server.post("/api/users", &signup).await.unwrap();
    let user: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!user.is_chirpy_red);

    let response = server
        .post_api_key(
            "/api/polka/webhooks",
            TEST_POLKA_KEY,
            &PolkaEvent::upgrade(user.id),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The upgrade shows up on the next login
    let response = server
        .post("/api/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    let login: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(login.is_chirpy_red);
}

#[tokio::test]
async fn test_webhook_rejects_bad_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let event = PolkaEvent::upgrade(Uuid::new_v4());

    // Wrong key
    let response = server
        .post_api_key("/api/polka/webhooks", "wrong-key", &event)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "INVALID_API_KEY");

    // No Authorization header at all
    let response = server.post("/api/polka/webhooks", &event).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");

    // Bearer scheme instead of ApiKey
    let response = server
        .post_auth("/api/polka/webhooks", TEST_POLKA_KEY, &event)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "INVALID_AUTHORIZATION_FORMAT");
}

#[tokio::test]
async fn test_webhook_ignores_other_events() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    let response = server.post("/api/users", &signup).await.unwrap();
    let user: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_api_key(
            "/api/polka/webhooks",
            TEST_POLKA_KEY,
            &PolkaEvent::other("user.downgraded", user.id),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Unhandled events leave the account untouched
    let response = server
        .post("/api/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    let login: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!login.is_chirpy_red);
}

#[tokio::test]
async fn test_webhook_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_api_key(
            "/api/polka/webhooks",
            TEST_POLKA_KEY,
            &PolkaEvent::upgrade(Uuid::new_v4()),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.error.code, "UNKNOWN_USER");
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_metrics_counts_app_hits() {
    if !check_test_env().await {
        return;
    }

    // Each server has its own counter, so counts here are deterministic
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/admin/metrics").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Welcome, Chirpy Admin"));
    assert!(body.contains("Chirpy has been visited 0 times!"));

    // Hits count regardless of whether the static site is present
    server.get("/app/").await.unwrap();
    server.get("/app/").await.unwrap();

    let response = server.get("/admin/metrics").await.unwrap();
    let body = response.text().await.unwrap();
    assert!(body.contains("Chirpy has been visited 2 times!"));
}

#[tokio::test]
async fn test_reset_forbidden_outside_development() {
    if !check_test_env().await {
        return;
    }

    let config = production_test_config().expect("Failed to build config");
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    let response = server.post("/admin/reset", &()).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();

    assert_eq!(error.error.code, "PERMISSION_DENIED");
}

/// Wipes every user in the database, so it cannot run next to the other
/// tests. Run it alone: cargo test -p integration-tests -- --ignored
#[tokio::test]
#[ignore]
async fn test_admin_reset_wipes_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup = SignupRequest::unique();
    server.post("/api/users", &signup).await.unwrap();

    // Give the counter something to reset
    server.get("/app/").await.unwrap();

    let response = server.post("/admin/reset", &()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");

    // The account is gone
    let response = server
        .post("/api/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // And the counter starts over
    let response = server.get("/admin/metrics").await.unwrap();
    let body = response.text().await.unwrap();
    assert!(body.contains("Chirpy has been visited 0 times!"));
}
