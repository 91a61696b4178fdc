use super::{Envelope, provider_failure, respond};
use crate::provider;
use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path= "/auth/logout",
    responses (
        (status = 200, description = "Logged out; the bearer token, if any, was revoked", body = Envelope, content_type = "application/json"),
        (status = 500, description = "Identity provider failure", body = Envelope),
    ),
    tag= "auth"
)]
// axum handler for logout
#[instrument(skip(provider, headers))]
pub async fn logout(provider: Extension<Arc<provider::Client>>, headers: HeaderMap) -> Response {
    if let Some(token) = bearer_token(&headers) {
        if let Err(err) = provider.sign_out(token).await {
            return provider_failure(&err);
        }
    } else {
        debug!("No bearer token, nothing to revoke");
    }

    respond(StatusCode::OK, Envelope::success("Logged out successfully"))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer jwt"));
        assert_eq!(bearer_token(&headers), Some("jwt"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer  jwt "));
        assert_eq!(bearer_token(&headers), Some("jwt"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
