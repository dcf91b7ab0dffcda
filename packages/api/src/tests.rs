//! End-to-end tests of the assembled router.

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Request, StatusCode,
    },
    response::{Redirect, Response},
    routing,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_sessions::Session;

use crate::auth::{OAuthProfile, Provider};
use crate::routes::{assemble, auth_routes, complete_oauth};
use crate::{app, AppState, Settings};

fn pages() -> Router {
    Router::new().fallback(|| async { "page" })
}

fn test_app_with(settings: Settings) -> Router {
    app(AppState::new(settings), pages())
}

fn test_app() -> Router {
    test_app_with(Settings::default())
}

fn google_settings() -> Settings {
    Settings::from_toml("[google.client]\nid = \"google-id\"\nsecret = \"google-secret\"").unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response.headers()[LOCATION].to_str().unwrap()
}

/// `name=value` part of the session cookie.
fn session_cookie(response: &Response) -> String {
    let header = response.headers()[SET_COOKIE].to_str().unwrap();
    header.split(';').next().unwrap().to_string()
}

async fn sign_up(app: &Router, email: &str, password: &str) -> Response {
    send(
        app,
        post_json(
            "/api/auth/signup",
            json!({ "email": email, "password": password, "name": "Ada" }),
            None,
        ),
    )
    .await
}

async fn sign_in(app: &Router, email: &str, password: &str) -> Response {
    send(
        app,
        post_json(
            "/api/auth/callback/credentials",
            json!({ "email": email, "password": password }),
            None,
        ),
    )
    .await
}

#[tokio::test]
async fn test_signup_created() {
    let app = test_app();
    let response = sign_up(&app, "ada@example.com", "secret1").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["name"], "Ada");
    assert!(body["user"]["id"].as_str().is_some());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_signup_echoes_submitted_email() {
    let app = test_app();
    let response = sign_up(&app, "Ada.Lovelace@Example.com", "secret1").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "Ada.Lovelace@Example.com");

    let response = sign_in(&app, "ada.lovelace@example.com", "secret1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "Ada.Lovelace@Example.com");
}

#[tokio::test]
async fn test_signup_malformed_email() {
    let app = test_app();
    let response = sign_up(&app, "ada-at-example", "secret1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d["field"] == "email"));
}

#[tokio::test]
async fn test_signup_short_password_and_bad_json() {
    let app = test_app();
    let response = sign_up(&app, "ada@example.com", "12345").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["details"][0]["field"], "password");

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/signup")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = test_app();
    assert_eq!(
        sign_up(&app, "ada@example.com", "secret1").await.status(),
        StatusCode::CREATED
    );

    let response = sign_up(&app, "Ada@Example.com", "another1").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"], "User with this email already exists");
}

#[tokio::test]
async fn test_sign_in_failures_are_opaque() {
    let app = test_app();
    sign_up(&app, "ada@example.com", "secret1").await;

    let wrong_password = sign_in(&app, "ada@example.com", "secret2").await;
    let unknown_email = sign_in(&app, "eve@example.com", "secret1").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert!(wrong_password.headers().get(SET_COOKIE).is_none());
    assert_eq!(body_json(wrong_password).await, body_json(unknown_email).await);
}

#[tokio::test]
async fn test_unauthenticated_gating() {
    let app = test_app();

    let response = send(&app, get("/", None)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/auth/signin");

    let response = send(&app, get("/profile", None)).await;
    assert_eq!(location(&response), "/auth/signin");

    let response = send(&app, get("/auth/signin", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get("/assets/app.css", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get("/api/auth/session", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, Value::Null);
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = test_app();
    sign_up(&app, "ada@example.com", "secret1").await;

    let response = sign_in(&app, "ada@example.com", "secret1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "ada@example.com");
    let user_id = body["user"]["id"].clone();

    let response = send(&app, get("/api/auth/session", Some(&cookie))).await;
    let body = body_json(response).await;
    assert_eq!(body["user"]["id"], user_id);
    assert_eq!(body["user"]["name"], "Ada");

    let response = send(&app, get("/", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get("/auth/signin", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/");

    let response = send(&app, post_json("/api/auth/signout", json!({}), Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["url"], "/auth/signin");

    let response = send(&app, get("/", Some(&cookie))).await;
    assert_eq!(location(&response), "/auth/signin");
}

#[tokio::test]
async fn test_providers_listing() {
    let response = send(&test_app(), get("/api/auth/providers", None)).await;
    let body = body_json(response).await;
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["credentials"]);

    let response = send(&test_app_with(google_settings()), get("/api/auth/providers", None)).await;
    let body = body_json(response).await;
    assert_eq!(body[1]["id"], "google");
    assert_eq!(body[1]["type"], "oauth");
    assert_eq!(
        body[1]["callback_url"],
        "http://localhost:8080/api/auth/callback/google"
    );
}

#[tokio::test]
async fn test_oauth_sign_in_redirects() {
    let response = send(&test_app(), get("/api/auth/signin/google", None)).await;
    assert_eq!(location(&response), "/auth/signin?error=Configuration");

    let response = send(&test_app(), get("/api/auth/signin/myspace", None)).await;
    assert_eq!(location(&response), "/auth/signin?error=OAuthSignin");

    let response = send(
        &test_app_with(google_settings()),
        get("/api/auth/signin/google", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("https://accounts.google.com/"));
}

#[tokio::test]
async fn test_oauth_callback_rejects_unknown_state() {
    let app = test_app_with(google_settings());

    let response = send(
        &app,
        get("/api/auth/callback/google?code=abc&state=forged", None),
    )
    .await;
    assert_eq!(location(&response), "/auth/signin?error=OAuthCallback");
    assert!(response.headers().get(SET_COOKIE).is_none());

    let response = send(
        &app,
        get("/api/auth/callback/google?error=access_denied", None),
    )
    .await;
    assert_eq!(location(&response), "/auth/signin?error=AccessDenied");
}

/// Profile a provider would have returned, passed in the query string.
#[derive(Deserialize)]
struct ProviderProfile {
    email: String,
    name: Option<String>,
    verified: bool,
}

/// Callback that skips the code exchange and signs in with the given profile.
async fn profile_callback(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
    Query(profile): Query<ProviderProfile>,
) -> Redirect {
    let fetched = provider.parse::<Provider>().map(|p| {
        (
            p,
            OAuthProfile {
                email: profile.email,
                name: profile.name,
                email_verified: profile.verified,
            },
        )
    });
    complete_oauth(&state, &session, &provider, fetched).await
}

fn app_with_profile_callback(state: AppState) -> Router {
    let routes = auth_routes().route("/callback/profile/{provider}", routing::get(profile_callback));
    assemble(routes, state, pages())
}

#[tokio::test]
async fn test_oauth_callback_creates_account_and_session() {
    let state = AppState::new(google_settings());
    let app = app_with_profile_callback(state.clone());

    let response = send(
        &app,
        get(
            "/api/auth/callback/profile/google?email=Grace@Example.com&name=Grace&verified=true",
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let cookie = session_cookie(&response);

    let user = state.users.find_by_email("grace@example.com").await.unwrap();
    assert_eq!(user.provider.as_deref(), Some("google"));
    assert!(user.password_hash.is_none());

    let body = body_json(send(&app, get("/api/auth/session", Some(&cookie))).await).await;
    assert_eq!(body["user"]["id"], user.id.to_string());
    assert_eq!(body["user"]["email"], "Grace@Example.com");
    assert_eq!(body["user"]["name"], "Grace");

    let response = send(&app, get("/", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_oauth_callback_reuses_credential_account() {
    let state = AppState::new(google_settings());
    let app = app_with_profile_callback(state.clone());
    let body = body_json(sign_up(&app, "ada@example.com", "secret1").await).await;
    let account_id = body["user"]["id"].clone();

    let response = send(
        &app,
        get(
            "/api/auth/callback/profile/apple?email=ADA@example.com&verified=true",
            None,
        ),
    )
    .await;
    assert_eq!(location(&response), "/");
    let cookie = session_cookie(&response);

    let body = body_json(send(&app, get("/api/auth/session", Some(&cookie))).await).await;
    assert_eq!(body["user"]["id"], account_id);
    assert_eq!(state.users.len().await, 1);
}

#[tokio::test]
async fn test_oauth_callback_refuses_unverified_email() {
    let state = AppState::new(google_settings());
    let app = app_with_profile_callback(state.clone());
    sign_up(&app, "victim@example.com", "secret1").await;

    let response = send(
        &app,
        get(
            "/api/auth/callback/profile/google?email=victim@example.com&verified=false",
            None,
        ),
    )
    .await;
    assert_eq!(location(&response), "/auth/signin?error=OAuthCallback");
    assert!(response.headers().get(SET_COOKIE).is_none());

    let response = send(
        &app,
        get(
            "/api/auth/callback/profile/google?email=new@example.com&verified=false",
            None,
        ),
    )
    .await;
    assert_eq!(location(&response), "/auth/signin?error=OAuthCallback");
    assert_eq!(state.users.len().await, 1);
}
