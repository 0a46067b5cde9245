//! Session extraction
//!
//! The gateway never validates credentials itself. It lifts the caller's
//! bearer token into a [`Session`] handle that services receive explicitly
//! and forward to the business API, which owns authentication.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::error::AppError;

/// Bearer session of the current caller
#[derive(Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn bearer_token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Unauthorized {
                    message: "Missing or invalid Authorization header".to_string(),
                    message_pt: "Cabeçalho Authorization ausente ou inválido".to_string(),
                })?;

        let token = bearer.token().trim();
        if token.is_empty() {
            return Err(AppError::Unauthorized {
                message: "Empty bearer token".to_string(),
                message_pt: "Token de acesso vazio".to_string(),
            });
        }

        Ok(Session::new(token))
    }
}
