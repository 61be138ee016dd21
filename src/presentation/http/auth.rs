use axum::{
    Json, Router,
    extract::{FromRequestParts, State},
    http::{HeaderMap, HeaderValue, header, request::Parts},
    routing::{get, post},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::access::AccessError;
use crate::application::services::session::{SessionIdentity, SessionTokenError};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::domain::jobs::document::JsonObject;
use crate::presentation::http::error::ApiError;

pub const TOKEN_COOKIE: &str = "token";

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/jwt", post(issue_token))
        .route("/logout", get(logout))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/jwt", tag = "Auth", request_body = serde_json::Value, responses(
    (status = 200, body = SuccessResponse, description = "Session cookie set"),
    (status = 400, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn issue_token(
    State(ctx): State<AppContext>,
    Json(payload): Json<JsonObject>,
) -> Result<(HeaderMap, Json<SuccessResponse>), ApiError> {
    let identity = SessionIdentity::from_payload(payload)
        .map_err(|e| ApiError::invalid_argument(e.to_string()))?;
    let tokens = ctx.session_tokens();
    let token = tokens.issue(&identity).map_err(|e| ApiError::Internal(e.into()))?;

    let policy = CookiePolicy::for_config(&ctx.cfg);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&build_session_cookie(&token, tokens.ttl_secs(), policy))
            .map_err(|e| ApiError::Internal(e.into()))?,
    );
    tracing::debug!(email = %identity.email, "session_issued");
    Ok((headers, Json(SuccessResponse { success: true })))
}

#[utoipa::path(get, path = "/logout", tag = "Auth", responses((status = 200, body = SuccessResponse)))]
pub async fn logout(
    State(ctx): State<AppContext>,
) -> Result<(HeaderMap, Json<SuccessResponse>), ApiError> {
    let policy = CookiePolicy::for_config(&ctx.cfg);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&build_cleared_cookie(policy))
            .map_err(|e| ApiError::Internal(e.into()))?,
    );
    Ok((headers, Json(SuccessResponse { success: true })))
}

// --- Session extractor ---

/// The verified identity behind the request's `token` cookie. Rejects with
/// 401 before the handler runs when the cookie is missing or fails
/// verification.
pub struct SessionUser(pub SessionIdentity);

#[axum::async_trait]
impl FromRequestParts<AppContext> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(|h| get_cookie(h, TOKEN_COOKIE))
            .filter(|t| !t.is_empty())
            .ok_or(AccessError::Unauthenticated)?;

        match ctx.session_tokens().verify(&token) {
            Ok(identity) => Ok(SessionUser(identity)),
            Err(e @ SessionTokenError::Invalid(_)) => {
                tracing::debug!(error = ?e, "session_token_rejected");
                Err(AccessError::Unauthenticated.into())
            }
            Err(e) => Err(ApiError::Internal(e.into())),
        }
    }
}

// --- Cookie helpers ---

/// Development keeps the cookie first-party; production serves a frontend
/// on another site, which browsers only allow with `SameSite=None; Secure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
    pub same_site: &'static str,
}

impl CookiePolicy {
    pub fn for_config(cfg: &Config) -> Self {
        if cfg.is_production {
            Self {
                secure: true,
                same_site: "None",
            }
        } else {
            Self {
                secure: false,
                same_site: "Strict",
            }
        }
    }
}

fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    for part in cookie_header.split(';') {
        let kv = part.trim();
        if let Some((k, v)) = kv.split_once('=') {
            if k.trim() == name {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}

fn build_session_cookie(token: &str, max_age_secs: i64, policy: CookiePolicy) -> String {
    let secure_attr = if policy.secure { "; Secure" } else { "" };
    format!(
        "{}={}; HttpOnly{}; Path=/; Max-Age={}; SameSite={}",
        TOKEN_COOKIE,
        token,
        secure_attr,
        max_age_secs.max(0),
        policy.same_site
    )
}

fn build_cleared_cookie(policy: CookiePolicy) -> String {
    let secure_attr = if policy.secure { "; Secure" } else { "" };
    format!(
        "{}=; HttpOnly{}; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; SameSite={}",
        TOKEN_COOKIE, secure_attr, policy.same_site
    )
}
