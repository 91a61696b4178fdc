//! Request/response types for auth endpoints.

use crate::provider::UserSummary;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;
use utoipa::{IntoParams, ToSchema};

/// Response body shared by every auth route.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// `{id, email}` on signup, login and check-session; the full provider record on user lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub user: Option<Value>,
    /// Provider session bundle, only on login. `null` when the provider issued none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub session: Option<Value>,
}

impl Envelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            user: None,
            session: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            user: None,
            session: None,
        }
    }

    /// A success envelope carrying only the `{id, email}` projection.
    pub fn summary(user: &UserSummary) -> Self {
        Self {
            success: true,
            message: None,
            user: None,
            session: None,
        }
        .with_user(user)
    }

    /// A success envelope carrying only a user.
    pub fn user(user: Value) -> Self {
        Self {
            success: true,
            message: None,
            user: Some(user),
            session: None,
        }
    }

    #[must_use]
    pub fn with_user(mut self, user: &UserSummary) -> Self {
        self.user = serde_json::to_value(user).ok();
        self
    }

    #[must_use]
    pub fn with_session(mut self, session: Option<Value>) -> Self {
        self.session = Some(session.unwrap_or(Value::Null));
        self
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub username: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Provider user id.
    pub user_id: Option<String>,
}

impl UserQuery {
    /// Read `user_id` from a raw query string. The first occurrence wins and
    /// undecodable input counts as absent, so parsing never rejects a request.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let user_id = raw.and_then(|raw| {
            form_urlencoded::parse(raw.as_bytes())
                .find(|(key, _)| key == "user_id")
                .map(|(_, value)| value.into_owned())
        });

        Self { user_id }
    }

    /// The id, unless missing or blank.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}
