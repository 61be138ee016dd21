//! Stateless session tokens.
//!
//! A token is an HS256 JWT carrying the caller's identity claim (`email` plus
//! whatever else the login payload held) and an expiry. Nothing is stored
//! server-side: a token is valid for as long as its signature checks out and
//! `exp` has not passed. Logging out only clears the client's cookie.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::jobs::document::JsonObject;

/// Claims the issuer owns; any caller-supplied values for these are dropped.
const RESERVED_CLAIMS: [&str; 3] = ["exp", "iat", "nbf"];

#[derive(thiserror::Error, Debug)]
pub enum SessionTokenError {
    #[error("session payload must carry a string `email`")]
    MissingEmail,
    #[error("failed to sign session token")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("invalid session token")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// The identity claim embedded in a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub email: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl SessionIdentity {
    pub fn from_payload(mut payload: JsonObject) -> Result<Self, SessionTokenError> {
        let email = match payload.remove("email") {
            Some(JsonValue::String(s)) if !s.trim().is_empty() => s,
            _ => return Err(SessionTokenError::MissingEmail),
        };
        for key in RESERVED_CLAIMS {
            payload.remove(key);
        }
        Ok(Self {
            email,
            extra: payload,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(flatten)]
    identity: SessionIdentity,
    iat: i64,
    exp: i64,
}

#[derive(Clone)]
pub struct SessionTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl SessionTokens {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        // Caller payload may carry `aud`; it rides along as an ordinary claim.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    pub fn issue(&self, identity: &SessionIdentity) -> Result<String, SessionTokenError> {
        let now = chrono::Utc::now().timestamp();
        let claims = SessionClaims {
            identity: identity.clone(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(SessionTokenError::Signing)
    }

    pub fn verify(&self, token: &str) -> Result<SessionIdentity, SessionTokenError> {
        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation)
                .map_err(SessionTokenError::Invalid)?;
        Ok(data.claims.identity)
    }
}
