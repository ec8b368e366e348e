use std::convert::Infallible;

use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use ayurdiet_core::domain::authentication::{ports::TokenVerifier, value_objects::Identity};
use thiserror::Error;
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token not found")]
    TokenNotFound,
    #[error("Invalid token")]
    InvalidToken,
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Unauthorized(error.to_string())
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

/// Resolves the bearer token, if any, into an [`Identity`] request extension. Requests
/// without a valid token continue anonymously with the failure recorded for extractors.
pub async fn auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let outcome = match extract_token_from_bearer(&mut parts).await {
        Ok(token) => state
            .token_verifier
            .verify(&token)
            .map_err(|_| AuthError::InvalidToken),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(identity) => {
            parts.extensions.insert(identity);
        }
        Err(e) => {
            debug!(uri = %parts.uri, "continuing without identity: {}", e);
            parts.extensions.insert(e);
        }
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Identity for write routes; anonymous requests are rejected with 401.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let error = parts
            .extensions
            .get::<AuthError>()
            .copied()
            .unwrap_or(AuthError::TokenNotFound);

        Err(error.into())
    }
}

/// Identity for read routes, which answer anonymous callers with empty or default data.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}
