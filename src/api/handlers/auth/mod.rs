//! Account routes backed by the identity provider.
//!
//! Every handler answers with an [`Envelope`]. Presence failures and provider
//! answers without a user are `400`, provider failures are `500` with the
//! provider's error text, lookup misses are `404` (`/auth/user`) or `401`
//! (`/auth/check-session`).

pub mod login;
pub mod logout;
pub mod signup;
pub mod types;
pub mod user;


pub use login::login;
pub use logout::logout;
pub use signup::signup;
pub use types::{Envelope, LoginRequest, SignupRequest, UserQuery};
pub use user::{check_session, get_user};

use crate::provider;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

pub(crate) fn respond(status: StatusCode, envelope: Envelope) -> Response {
    (status, Json(envelope)).into_response()
}

pub(crate) fn bad_request(message: impl Into<String>) -> Response {
    respond(StatusCode::BAD_REQUEST, Envelope::failure(message))
}

pub(crate) fn provider_failure(err: &provider::Error) -> Response {
    error!("Identity provider call failed: {}", err);
    respond(
        StatusCode::INTERNAL_SERVER_ERROR,
        Envelope::failure(err.to_string()),
    )
}

/// Return the value of a required string field, or the `400` to answer with.
pub(crate) fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, Response> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(bad_request(format!("Missing field: {field}"))),
    }
}
