use super::{Envelope, LoginRequest, bad_request, provider_failure, required, respond};
use crate::provider;
use axum::{Json, extract::Extension, http::StatusCode, response::Response};
use std::sync::Arc;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path= "/auth/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful, session included", body = Envelope, content_type = "application/json"),
        (status = 400, description = "Missing fields or the provider returned no user", body = Envelope),
        (status = 500, description = "Identity provider failure, including rejected credentials", body = Envelope),
    ),
    tag= "auth"
)]
// axum handler for login
#[instrument(skip(provider, payload))]
pub async fn login(
    provider: Extension<Arc<provider::Client>>,
    payload: Option<Json<LoginRequest>>,
) -> Response {
    let Some(Json(request)) = payload else {
        return bad_request("Missing payload");
    };

    let email = match required(request.email.as_deref(), "email") {
        Ok(email) => email,
        Err(response) => return response,
    };

    let password = match required(request.password.as_deref(), "password") {
        Ok(password) => password,
        Err(response) => return response,
    };

    let sign_in = match provider.sign_in_with_password(email, password).await {
        Ok(sign_in) => sign_in,
        Err(err) => return provider_failure(&err),
    };

    let Some(user) = sign_in.user else {
        debug!("Login answered without a user");
        return bad_request(
            sign_in
                .message
                .unwrap_or_else(|| "Login did not return a user".to_string()),
        );
    };

    debug!(user_id = %user.id, "Login successful");

    respond(
        StatusCode::OK,
        Envelope::success("Login successful")
            .with_user(&user.summary())
            .with_session(sign_in.session),
    )
}
