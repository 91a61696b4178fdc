use super::{Envelope, SignupRequest, bad_request, provider_failure, required, respond};
use crate::provider::{self, Profile, Settings, User};
use axum::{Json, extract::Extension, http::StatusCode, response::Response};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

#[utoipa::path(
    post,
    path= "/auth/signup",
    request_body = SignupRequest,
    responses (
        (status = 201, description = "Account, profile and settings created", body = Envelope, content_type = "application/json"),
        (status = 400, description = "Missing fields or the provider returned no user", body = Envelope),
        (status = 500, description = "Identity provider failure", body = Envelope),
    ),
    tag= "auth"
)]
// axum handler for signup
#[instrument(skip(provider, payload))]
pub async fn signup(
    provider: Extension<Arc<provider::Client>>,
    payload: Option<Json<SignupRequest>>,
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

    let sign_up = match provider.sign_up(email, password).await {
        Ok(sign_up) => sign_up,
        Err(err) => return provider_failure(&err),
    };

    let Some(user) = sign_up.user else {
        debug!("Signup answered without a user");
        return bad_request(
            sign_up
                .message
                .unwrap_or_else(|| "Signup did not return a user".to_string()),
        );
    };

    if let Err(err) = insert_account_rows(&provider, &user, &request, email).await {
        compensate(&provider, &user.id).await;
        return provider_failure(&err);
    }

    info!(user_id = %user.id, "User created");

    let mut summary = user.summary();
    if summary.email.is_empty() {
        summary.email = email.to_string();
    }

    respond(
        StatusCode::CREATED,
        Envelope::success("User created successfully").with_user(&summary),
    )
}

async fn insert_account_rows(
    provider: &provider::Client,
    user: &User,
    request: &SignupRequest,
    email: &str,
) -> Result<(), provider::Error> {
    provider
        .insert_profile(&Profile {
            id: user.id.clone(),
            full_name: request.full_name.clone(),
            username: request.username.clone(),
            email: email.to_string(),
        })
        .await?;

    provider
        .insert_settings(&Settings {
            user_id: user.id.clone(),
        })
        .await
}

// Best effort: the caller sees the write error either way
async fn compensate(provider: &provider::Client, user_id: &str) {
    warn!(user_id, "Dependent write failed, deleting new account");

    match provider.admin_delete_user(user_id).await {
        Ok(()) => info!(user_id, "Deleted account after failed signup"),
        Err(err) => error!(user_id, "Failed to delete account after failed signup: {}", err),
    }
}
