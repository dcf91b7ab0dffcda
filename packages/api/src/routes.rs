//! # HTTP surface of the auth layer
//!
//! Everything is mounted under `/api/auth`:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `POST` | `/signup` | [`signup`]: register an email + password account |
//! | `POST` | `/callback/credentials` | [`credentials_sign_in`]: email + password sign-in |
//! | `GET` | `/signin/{provider}` | [`oauth_sign_in`]: redirect to Google / Apple |
//! | `GET`, `POST` | `/callback/{provider}` | [`oauth_callback_query`] / [`oauth_callback_form`] |
//! | `GET` | `/session` | [`session_info`]: the signed-in identity or `null` |
//! | `POST` | `/signout` | [`sign_out`]: clear the session |
//! | `GET` | `/providers` | [`providers`]: sign-in methods currently available |
//!
//! [`app`] wraps these routes, a page service for everything else, the
//! [route gate](crate::gate) and the session layer into one router.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::Redirect,
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, Session, SessionManagerLayer};
use tracing::{info, warn};

use crate::auth::{self, AppleOAuth, CallbackParams, GoogleOAuth, OAuthProfile, Provider};
use crate::error::{AuthError, OAuthError, SignupError};
use crate::gate::{route_gate, HOME_PATH, SIGN_IN_PATH};
use crate::models::{FieldError, ProviderInfo, SessionInfo, SignUpRequest};
use crate::state::AppState;

/// Routes served under `/api/auth`.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/callback/credentials", post(credentials_sign_in))
        .route("/signin/{provider}", get(oauth_sign_in))
        .route(
            "/callback/{provider}",
            get(oauth_callback_query).post(oauth_callback_form),
        )
        .route("/session", get(session_info))
        .route("/signout", post(sign_out))
        .route("/providers", get(providers))
}

/// The complete application: auth API, `pages` for every other path, the
/// route gate and in-memory sessions.
pub fn app(state: AppState, pages: Router) -> Router {
    assemble(auth_routes(), state, pages)
}

/// Mount `routes` under `/api/auth` and wrap everything in the gate and the
/// session layer.
pub(crate) fn assemble(routes: Router<AppState>, state: AppState, pages: Router) -> Router {
    let session = &state.settings.session;
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(session.days)));

    Router::new()
        .nest("/api/auth", routes)
        .with_state(state)
        .fallback_service(pages)
        .layer(middleware::from_fn(route_gate))
        .layer(session_layer)
}

/// Register a new user with email and password.
pub async fn signup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), SignupError> {
    let value: Value = serde_json::from_slice(&body).map_err(|_| {
        SignupError::Validation(vec![FieldError {
            field: "body".to_string(),
            message: "Invalid JSON".to_string(),
        }])
    })?;
    let request = SignUpRequest::from_json(&value).map_err(SignupError::Validation)?;

    if state.users.find_by_email(&request.email).await.is_some() {
        return Err(SignupError::Conflict);
    }

    let password_hash = auth::hash_password(&request.password)
        .map_err(|e| SignupError::Internal(e.to_string()))?;

    let user = state
        .users
        .create(&request.email, request.name, password_hash)
        .await
        .map_err(|_| SignupError::Conflict)?;

    info!("registered user {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User created successfully",
            "user": user.to_info(),
        })),
    ))
}

/// Log in with email and password.
pub async fn credentials_sign_in(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<Json<SessionInfo>, AuthError> {
    let value: Value =
        serde_json::from_slice(&body).map_err(|_| AuthError::InvalidCredentials)?;
    let user = auth::authorize(&state.users, &value).await?;

    auth::sign_in(&session, &user).await?;
    info!("user {} signed in with credentials", user.id);

    Ok(Json(SessionInfo { user }))
}

/// Start an OAuth sign-in by redirecting to the provider.
pub async fn oauth_sign_in(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Redirect {
    match start_oauth(&state, &provider).await {
        Ok(url) => Redirect::to(&url),
        Err(e) => {
            warn!("cannot start {} sign-in: {}", provider, e);
            error_redirect(&e)
        }
    }
}

async fn start_oauth(state: &AppState, provider: &str) -> Result<String, OAuthError> {
    let url = match provider.parse::<Provider>()? {
        Provider::Google => {
            GoogleOAuth::new(&state.settings)?
                .generate_auth_url(&state.pending)
                .await
        }
        Provider::Apple => {
            AppleOAuth::new(&state.settings)?
                .generate_auth_url(&state.pending)
                .await
        }
    };
    Ok(url)
}

/// Provider callback delivered as a query string (Google).
pub async fn oauth_callback_query(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
) -> Redirect {
    finish_oauth(&state, &session, &provider, params).await
}

/// Provider callback delivered as a form post (Apple).
pub async fn oauth_callback_form(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
    Form(params): Form<CallbackParams>,
) -> Redirect {
    finish_oauth(&state, &session, &provider, params).await
}

async fn finish_oauth(
    state: &AppState,
    session: &Session,
    provider: &str,
    params: CallbackParams,
) -> Redirect {
    let fetched = fetch_profile(state, provider, &params).await;
    complete_oauth(state, session, provider, fetched).await
}

/// Validate the callback and ask the provider who signed in.
async fn fetch_profile(
    state: &AppState,
    provider: &str,
    params: &CallbackParams,
) -> Result<(Provider, OAuthProfile), OAuthError> {
    let provider = provider.parse::<Provider>()?;
    let profile = match provider {
        Provider::Google => {
            GoogleOAuth::new(&state.settings)?
                .exchange_code(&state.pending, params)
                .await?
        }
        Provider::Apple => {
            AppleOAuth::new(&state.settings)?
                .exchange_code(&state.pending, params)
                .await?
        }
    };
    Ok((provider, profile))
}

/// Apply the OAuth sign-in rule to a fetched profile, write the session and
/// send the browser home, or back to the sign-in page with an error code.
pub(crate) async fn complete_oauth(
    state: &AppState,
    session: &Session,
    provider: &str,
    fetched: Result<(Provider, OAuthProfile), OAuthError>,
) -> Redirect {
    let user = match fetched {
        Ok((provider, profile)) => {
            auth::sign_in_with_profile(&state.users, provider, profile).await
        }
        Err(e) => Err(e),
    };
    let user = match user {
        Ok(user) => user,
        Err(e) => {
            warn!("{} callback failed: {}", provider, e);
            return error_redirect(&e);
        }
    };

    if let Err(e) = auth::sign_in(session, &user).await {
        tracing::error!("Failed to set session: {}", e);
        return Redirect::to(&format!("{SIGN_IN_PATH}?error=SessionRequired"));
    }

    info!("user {} signed in with {}", user.id, provider);
    Redirect::to(HOME_PATH)
}

fn error_redirect(error: &OAuthError) -> Redirect {
    Redirect::to(&format!("{SIGN_IN_PATH}?error={}", error.code()))
}

/// The signed-in identity, or `null`.
pub async fn session_info(session: Session) -> Result<Json<Option<SessionInfo>>, AuthError> {
    let user = auth::current_user(&session).await?;
    Ok(Json(user.map(|user| SessionInfo { user })))
}

/// Log out the current user by clearing the session.
pub async fn sign_out(session: Session) -> Result<Json<Value>, AuthError> {
    auth::sign_out(&session).await?;
    Ok(Json(json!({ "url": SIGN_IN_PATH })))
}

/// Sign-in methods: credentials always, OAuth providers when configured.
pub async fn providers(State(state): State<AppState>) -> Json<Vec<ProviderInfo>> {
    let origin = state.settings.origin();

    let mut list = vec![ProviderInfo {
        id: "credentials".to_string(),
        name: "Credentials".to_string(),
        r#type: "credentials".to_string(),
        signin_url: format!("{origin}/api/auth/callback/credentials"),
        callback_url: format!("{origin}/api/auth/callback/credentials"),
    }];

    list.extend(
        Provider::ALL
            .into_iter()
            .filter(|p| p.is_configured(&state.settings))
            .map(|p| ProviderInfo {
                id: p.id().to_string(),
                name: p.name().to_string(),
                r#type: "oauth".to_string(),
                signin_url: format!("{origin}/api/auth/signin/{}", p.id()),
                callback_url: format!("{origin}{}", auth::callback_path(p)),
            }),
    );

    Json(list)
}
