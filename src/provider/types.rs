//! Records exchanged with the identity provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A user record issued by the provider.
///
/// Only `id` and `email` are interpreted; every other field is kept so the full
/// record can be handed back to callers unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            email: self.email.clone(),
        }
    }
}

/// The `{id, email}` projection returned by signup, login and check-session.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
}

/// Outcome of an account creation.
#[derive(Debug, Clone, Default)]
pub struct SignUp {
    pub user: Option<User>,
    /// Provider message, kept for answers that carry no user.
    pub message: Option<String>,
}

/// Outcome of a password sign-in.
#[derive(Debug, Clone, Default)]
pub struct SignIn {
    pub user: Option<User>,
    /// Opaque token bundle; passed through as received.
    pub session: Option<Value>,
    pub message: Option<String>,
}

/// Row written to the `profiles` table after account creation.
#[derive(Serialize, Debug, Clone)]
pub struct Profile {
    pub id: String,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub email: String,
}

/// Row written to the `settings` table after account creation.
#[derive(Serialize, Debug, Clone)]
pub struct Settings {
    pub user_id: String,
}

/// Extract a user from a signup or token response.
///
/// The provider answers with either a session carrying a nested `user`, or with
/// the bare user object when email confirmation is pending.
pub(crate) fn user_from_body(body: &Value) -> Result<Option<User>, serde_json::Error> {
    let candidate = match body.get("user") {
        Some(Value::Null) | None => body,
        Some(user) => user,
    };

    if candidate.get("id").and_then(Value::as_str).is_none() {
        return Ok(None);
    }

    User::deserialize(candidate).map(Some)
}

/// First non-empty message field of a provider body.
///
/// GoTrue uses `msg` or `error_description`, PostgREST uses `message`.
pub(crate) fn message_from_body(body: &Value) -> Option<String> {
    ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
