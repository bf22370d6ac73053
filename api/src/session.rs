//! Session cookie plumbing
//!
//! The cookie carries the opaque token issued by the session service.
//! Protected handlers call [`authenticate`] at their top, the way the
//! original UI server resolved its `session` cookie per request.

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use std::sync::Arc;
use uuid::Uuid;

use gl_core::errors::{DomainError, DomainResult};
use gl_core::repositories::SessionRepository;
use gl_core::services::session::SessionService;
use gl_shared::config::SessionConfig;

/// Build the session cookie for a freshly issued token
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token)
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(CookieDuration::days(config.ttl_days))
        .finish()
}

/// Build an expired cookie that clears the session on the client
pub fn clear_session_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), "")
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(CookieDuration::ZERO)
        .finish()
}

/// The raw session token from the request, if the cookie is present
pub fn session_token(req: &HttpRequest, config: &SessionConfig) -> Option<String> {
    req.cookie(&config.cookie_name)
        .map(|c| c.value().to_string())
}

/// Resolve the request's session cookie to a user id
pub async fn authenticate<S: SessionRepository>(
    req: &HttpRequest,
    session_service: &Arc<SessionService<S>>,
    config: &SessionConfig,
) -> DomainResult<Uuid> {
    let token = session_token(req, config).ok_or(DomainError::Unauthorized)?;
    session_service.validate(&token).await
}
