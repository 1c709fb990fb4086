// Request authentication at the inbound edge.
//
// - `Identity` extracts the caller from `Authorization: Bearer <token>` or a
//   `token` cookie; 401 when neither resolves.
// - `AdminIdentity` additionally requires the ADMIN role; 403 otherwise.
// - GraphQL resolvers read the identity the router attached to the request.

use async_graphql::{Context, Result as GqlResult};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, header, request::Parts},
    response::Response,
};
use tracing::error;

use crate::modules::time_entries::adapters::inbound::graphql_types::gql_error;
use crate::modules::time_entries::adapters::inbound::responses::error_response;
use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

const TOKEN_COOKIE: &str = "token";

pub struct AdminIdentity(pub Identity);

pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == TOKEN_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

#[derive(Debug)]
pub enum AuthError {
    MissingCredentials,
    InvalidCredentials,
    Forbidden,
    ResolverUnavailable,
}

impl AuthError {
    fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::ResolverUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "missing credentials",
            AuthError::InvalidCredentials => "invalid credentials",
            AuthError::Forbidden => "admin role required",
            AuthError::ResolverUnavailable => "identity service unavailable",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials | AuthError::InvalidCredentials => "UNAUTHENTICATED",
            AuthError::Forbidden => "FORBIDDEN",
            AuthError::ResolverUnavailable => "UNAVAILABLE",
        }
    }

    pub fn into_response(self) -> Response {
        error_response(self.status(), self.message())
    }

    pub fn into_gql(self) -> async_graphql::Error {
        gql_error(self.code(), self.message())
    }
}

/// Resolves the caller of a request, if it carries any credentials at all.
pub async fn resolve_identity(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<Identity>, AuthError> {
    let Some(token) = token_from_headers(headers) else {
        return Ok(None);
    };
    match state.identities.resolve(&token).await {
        Ok(Some(identity)) => Ok(Some(identity)),
        Ok(None) => Err(AuthError::InvalidCredentials),
        Err(e) => {
            error!(error = %e, "identity resolver failed");
            Err(AuthError::ResolverUnavailable)
        }
    }
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve_identity(state, &parts.headers)
            .await
            .and_then(|identity| identity.ok_or(AuthError::MissingCredentials))
            .map_err(AuthError::into_response)
    }
}

impl FromRequestParts<AppState> for AdminIdentity {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let identity = Identity::from_request_parts(parts, state).await?;
        if !identity.is_admin() {
            return Err(AuthError::Forbidden.into_response());
        }
        Ok(AdminIdentity(identity))
    }
}

pub fn require_identity<'a>(context: &Context<'a>) -> GqlResult<&'a Identity> {
    context
        .data_opt::<Identity>()
        .ok_or_else(|| AuthError::MissingCredentials.into_gql())
}

pub fn require_admin<'a>(context: &Context<'a>) -> GqlResult<&'a Identity> {
    let identity = require_identity(context)?;
    if !identity.is_admin() {
        return Err(AuthError::Forbidden.into_gql());
    }
    Ok(identity)
}
