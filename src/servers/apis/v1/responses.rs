//! Common responses for the API v1 shared by all the contexts.
//!
//! Every error is returned as a JSON object with a `detail` field:
//!
//! ```json
//! {
//!   "detail": "Destination not found"
//! }
//! ```
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::error::Error;
use crate::{affiliate, travelpayouts};

/// Body of the error responses.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Body of the responses for actions that do not return a resource.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ActionStatus {
    pub message: String,
    pub success: bool,
}

// OK responses

#[must_use]
pub fn ok_response(message: &str) -> Response {
    Json(ActionStatus {
        message: message.to_owned(),
        success: true,
    })
    .into_response()
}

#[must_use]
pub fn json_response<T: Serialize>(resource: T) -> Response {
    Json(resource).into_response()
}

/// `201` response with the newly created resource.
#[must_use]
pub fn created_response<T: Serialize>(resource: T) -> Response {
    (StatusCode::CREATED, Json(resource)).into_response()
}

// Error responses

#[must_use]
pub fn error_response(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.to_owned(),
        }),
    )
        .into_response()
}

#[must_use]
pub fn bad_request_response(detail: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, detail)
}

#[must_use]
pub fn unauthorized_response(detail: &str) -> Response {
    error_response(StatusCode::UNAUTHORIZED, detail)
}

/// Status code returned for a domain error.
#[must_use]
pub fn status_code(error: &Error) -> StatusCode {
    match error {
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::AlreadySubscribed { .. } | Error::InvalidInput { .. } | Error::Affiliate(affiliate::Error::InvalidTime { .. }) => {
            StatusCode::BAD_REQUEST
        }
        Error::SeedingDisabled => StatusCode::FORBIDDEN,
        Error::Database { .. }
        | Error::Affiliate(affiliate::Error::MissingMarker | affiliate::Error::MissingPartnerId { .. })
        | Error::PartnerApi(travelpayouts::Error::MissingToken | travelpayouts::Error::Client { .. }) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        Error::PartnerApi(travelpayouts::Error::UpstreamStatus { status, .. }) => *status,
        Error::PartnerApi(
            travelpayouts::Error::UpstreamFailure { .. }
            | travelpayouts::Error::Unreachable { .. }
            | travelpayouts::Error::InvalidResponse { .. },
        ) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = status_code(&self);

        if status.is_server_error() {
            error!(target: "API", "{self}");
        }

        match self {
            // Driver messages may contain SQL.
            Error::Database { .. } => error_response(status, "Internal server error"),
            error => error_response(status, &error.to_string()),
        }
    }
}
