//! The session gate.
//!
//! Every request passes through [`session_gate`] after the cookie layer has
//! resolved a session. The gate copies the session identity into a request
//! extension ([`CurrentUser`]) so handlers and the role gates read from one
//! slot instead of re-querying the session. Role gates for the nested route
//! groups build on that slot.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::{
    model::user::SessionUser,
    server::{
        error::Error,
        model::{app::AppState, session::user::SessionCurrentUser},
        service::policy::RouteGroup,
    },
};

/// The per-request identity slot filled by [`session_gate`].
///
/// Holds `None` for anonymous requests. Handlers take it as an extractor; a
/// handler invoked without the gate in front sees an anonymous slot rather
/// than an error.
#[derive(Clone, Debug, Default)]
pub struct CurrentUser(pub Option<SessionUser>);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Resolves the session identity once per request and publishes it to the
/// rest of the stack.
///
/// A session that cannot be read is treated as anonymous rather than failing
/// the request; a tampered or expired cookie therefore downgrades to a
/// logged-out view of the portal.
pub async fn session_gate(session: Session, mut req: Request, next: Next) -> Response {
    let user = match SessionCurrentUser::get(&session).await {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read session, treating request as anonymous");
            None
        }
    };

    match &user {
        Some(user) => {
            tracing::debug!(username = %user.username, path = %req.uri().path(), "session user")
        }
        None => tracing::trace!(path = %req.uri().path(), "anonymous request"),
    }

    req.extensions_mut().insert(CurrentUser(user));

    next.run(req).await
}

/// Role gate for the dean section.
///
/// Applied as a layer over everything nested under `/dean`, including the
/// group fallback, so an unknown dean path still answers with the gate's
/// verdict instead of falling through to the static assets.
pub async fn require_dean(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Error> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .and_then(|slot| slot.0.as_ref());
    state.policy.ensure(user, RouteGroup::Dean)?;

    Ok(next.run(req).await)
}
