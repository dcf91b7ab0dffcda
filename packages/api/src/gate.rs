//! # Route gating
//!
//! Every page request is classified by path prefix and checked against the
//! session before it reaches the router:
//!
//! | Path | Signed in | Signed out |
//! |------|-----------|------------|
//! | `/api/auth…` | pass | pass |
//! | `/auth…` | redirect `/` | pass |
//! | anything else | pass | redirect `/auth/signin` |
//!
//! The rest of `/api` and static assets ([`is_excluded`]) bypass the gate.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::{debug, warn};

use crate::auth::current_user;

pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const HOME_PATH: &str = "/";

const STATIC_PREFIXES: [&str; 2] = ["/assets/", "/wasm/"];
const STATIC_EXTENSIONS: [&str; 6] = [".png", ".ico", ".svg", ".js", ".wasm", ".css"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    AuthApi,
    AuthPage,
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

pub fn classify(path: &str) -> RouteKind {
    if path.starts_with("/api/auth") {
        RouteKind::AuthApi
    } else if path.starts_with("/auth") {
        RouteKind::AuthPage
    } else {
        RouteKind::Protected
    }
}

pub fn decide(path: &str, authenticated: bool) -> GateDecision {
    match (classify(path), authenticated) {
        (RouteKind::AuthApi, _) => GateDecision::Allow,
        (RouteKind::AuthPage, true) => GateDecision::Redirect(HOME_PATH),
        (RouteKind::AuthPage, false) => GateDecision::Allow,
        (RouteKind::Protected, true) => GateDecision::Allow,
        (RouteKind::Protected, false) => GateDecision::Redirect(SIGN_IN_PATH),
    }
}

/// Paths the gate never looks at: the API and static files.
pub fn is_excluded(path: &str) -> bool {
    path == "/api"
        || path.starts_with("/api/")
        || STATIC_PREFIXES.iter().any(|p| path.starts_with(p))
        || STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// axum middleware applying [`decide`]. Must run inside the session layer.
pub async fn route_gate(session: Session, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if is_excluded(&path) {
        return next.run(request).await;
    }

    let authenticated = match current_user(&session).await {
        Ok(user) => user.is_some(),
        Err(e) => {
            warn!("unreadable session treated as signed out: {}", e);
            false
        }
    };

    match decide(&path, authenticated) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::Redirect(to) => {
            debug!("gate redirect {} -> {}", path, to);
            Redirect::temporary(to).into_response()
        }
    }
}
