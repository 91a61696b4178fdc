use super::{Envelope, UserQuery, provider_failure, respond};
use crate::provider;
use axum::{
    extract::{Extension, RawQuery},
    http::StatusCode,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, instrument};

#[utoipa::path(
    get,
    path= "/auth/user",
    params(UserQuery),
    responses (
        (status = 200, description = "Full provider user record", body = Envelope, content_type = "application/json"),
        (status = 404, description = "Missing or unknown user id", body = Envelope),
        (status = 500, description = "Identity provider failure", body = Envelope),
    ),
    tag= "auth"
)]
// axum handler for user lookup
#[instrument(skip(provider))]
pub async fn get_user(
    provider: Extension<Arc<provider::Client>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = UserQuery::from_raw(raw.as_deref());
    let not_found = || respond(StatusCode::NOT_FOUND, Envelope::failure("User not found"));

    let Some(user_id) = query.user_id() else {
        return not_found();
    };

    match provider.admin_get_user_by_id(user_id).await {
        Ok(Some(user)) => match serde_json::to_value(&user) {
            Ok(record) => respond(StatusCode::OK, Envelope::user(record)),
            Err(err) => provider_failure(&provider::Error::Decode(err.to_string())),
        },
        Ok(None) => {
            debug!(user_id, "User not found");
            not_found()
        }
        Err(err) => provider_failure(&err),
    }
}

/// Confirms that the user exists.
///
/// No token is inspected: any caller that knows a user id gets a positive answer.
#[utoipa::path(
    get,
    path= "/auth/check-session",
    params(UserQuery),
    responses (
        (status = 200, description = "User exists", body = Envelope, content_type = "application/json"),
        (status = 401, description = "Missing or unknown user id", body = Envelope),
        (status = 500, description = "Identity provider failure", body = Envelope),
    ),
    tag= "auth"
)]
#[instrument(skip(provider))]
pub async fn check_session(
    provider: Extension<Arc<provider::Client>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = UserQuery::from_raw(raw.as_deref());
    let no_session = || respond(StatusCode::UNAUTHORIZED, Envelope::failure("No valid session"));

    let Some(user_id) = query.user_id() else {
        return no_session();
    };

    match provider.admin_get_user_by_id(user_id).await {
        Ok(Some(user)) => respond(StatusCode::OK, Envelope::summary(&user.summary())),
        Ok(None) => no_session(),
        Err(err) => provider_failure(&err),
    }
}
