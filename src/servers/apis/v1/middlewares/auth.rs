//! Authentication middleware for the admin routes of the API.
//!
//! It uses a "token" GET param to authenticate the user. URLs must be of the
//! form:
//!
//! `http://<host>:<port>/api/v1/<context>?token=<token>`.
//!
//! > **NOTICE**: the token can be at any position in the URL, not just at the
//! > beginning or at the end.
//!
//! The token must be one of the `access_tokens` in the
//! [HTTP API configuration](tripcompare_configuration::HttpApi):
//!
//! ```toml
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
//!
//! All the tokens have the same permissions. The label is only used to
//! identify the token. When no token is configured the admin routes are open.
use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde::Deserialize;
use tripcompare_configuration::HttpApi;

use crate::core::Backend;
use crate::servers::apis::v1::responses::unauthorized_response;

/// Container for the `token` extracted from the query params.
#[derive(Deserialize, Debug)]
pub struct QueryParams {
    pub token: Option<String>,
}

/// Middleware for authentication using a "token" GET param.
pub async fn auth(State(backend): State<Arc<Backend>>, Query(params): Query<QueryParams>, request: Request, next: Next) -> Response {
    let http_api = &backend.config().http_api;

    if http_api.is_protected() {
        let Some(token) = params.token else {
            return AuthError::Unauthorized.into_response();
        };

        if !authenticate(&token, http_api) {
            return AuthError::TokenNotValid.into_response();
        }
    }

    next.run(request).await
}

/// Adds the [`auth`] middleware to every route of the router.
pub fn protect(router: Router, backend: &Arc<Backend>) -> Router {
    router.route_layer(middleware::from_fn_with_state(backend.clone(), auth))
}

enum AuthError {
    /// Missing token for authentication.
    Unauthorized,
    /// Token was provided but it is not valid.
    TokenNotValid,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthorized => unauthorized_response("unauthorized"),
            AuthError::TokenNotValid => unauthorized_response("token not valid"),
        }
    }
}

fn authenticate(token: &str, http_api_config: &HttpApi) -> bool {
    http_api_config.contains_token(token)
}
