//! Client for the hosted identity provider.
//!
//! Auth calls go to the GoTrue API under `/auth/v1`, table writes go to the
//! PostgREST API under `/rest/v1`. Admin and table calls use the service key when
//! one is configured and fall back to the public key otherwise.

mod error;
mod types;

pub use error::Error;
pub use types::{Profile, Settings, SignIn, SignUp, User, UserSummary};

use crate::cli::globals::GlobalArgs;
use reqwest::{Method, RequestBuilder, header::HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, instrument};
use url::Url;

const PROFILES_TABLE: &str = "profiles";
const SETTINGS_TABLE: &str = "settings";

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
    service_key: Option<SecretString>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .field("service_key", &self.service_key.as_ref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Build a client for the provider at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL is not http(s) or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: SecretString,
        service_key: Option<SecretString>,
    ) -> Result<Self, Error> {
        let mut base_url = Url::parse(base_url)?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::UnsupportedUrl(base_url.to_string()));
        }

        // Keep any path prefix when joining relative endpoints
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key,
            service_key,
        })
    }

    /// Build a client from the process-wide configuration.
    ///
    /// # Errors
    /// Same as [`Client::new`].
    pub fn from_globals(globals: &GlobalArgs) -> Result<Self, Error> {
        Self::new(
            &globals.provider_url,
            globals.provider_key.clone(),
            globals.provider_service_key.clone(),
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    fn user_endpoint(&self, user_id: &str) -> Result<Url, Error> {
        let mut url = self.endpoint("auth/v1/admin/users")?;
        url.path_segments_mut()
            .map_err(|()| Error::UnsupportedUrl(self.base_url.to_string()))?
            .push(user_id);
        Ok(url)
    }

    fn admin_key(&self) -> &SecretString {
        self.service_key.as_ref().unwrap_or(&self.api_key)
    }

    fn request(&self, method: Method, url: Url, key: &SecretString) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", key.expose_secret())
            .bearer_auth(key.expose_secret())
    }

    /// Create an account with email and password.
    ///
    /// `user` is `None` when the provider accepted the call without handing back a
    /// user; `message` then carries whatever the provider said.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx provider answer.
    #[instrument(skip(self, password))]
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUp, Error> {
        let url = self.endpoint("auth/v1/signup")?;
        let body = send(
            self.request(Method::POST, url, &self.api_key)
                .json(&json!({ "email": email, "password": password })),
        )
        .await?;

        let user = types::user_from_body(&body).map_err(|e| Error::Decode(e.to_string()))?;
        let message = types::message_from_body(&body);

        Ok(SignUp { user, message })
    }

    /// Exchange email and password for a session.
    ///
    /// # Errors
    /// Returns an error on transport failure or when the provider rejects the credentials.
    #[instrument(skip(self, password))]
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<SignIn, Error> {
        let mut url = self.endpoint("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let body = send(
            self.request(Method::POST, url, &self.api_key)
                .json(&json!({ "email": email, "password": password })),
        )
        .await?;

        let user = types::user_from_body(&body).map_err(|e| Error::Decode(e.to_string()))?;
        let message = types::message_from_body(&body);
        let session = body.get("access_token").is_some().then_some(body);

        Ok(SignIn {
            user,
            session,
            message,
        })
    }

    /// Revoke every session of the user owning `access_token`.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx provider answer.
    #[instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), Error> {
        let mut url = self.endpoint("auth/v1/logout")?;
        url.query_pairs_mut().append_pair("scope", "global");

        send(
            self.http
                .post(url)
                .header("apikey", self.api_key.expose_secret())
                .bearer_auth(access_token),
        )
        .await?;

        Ok(())
    }

    /// Look a user up by id through the admin API.
    ///
    /// # Errors
    /// Returns an error on transport failure or any non-2xx answer other than `404`.
    #[instrument(skip(self))]
    pub async fn admin_get_user_by_id(&self, user_id: &str) -> Result<Option<User>, Error> {
        let url = self.user_endpoint(user_id)?;

        match send(self.request(Method::GET, url, self.admin_key())).await {
            Ok(body) => types::user_from_body(&body).map_err(|e| Error::Decode(e.to_string())),
            Err(err) if err.is_not_found() => {
                debug!("user not found");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Delete a user through the admin API.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx provider answer.
    #[instrument(skip(self))]
    pub async fn admin_delete_user(&self, user_id: &str) -> Result<(), Error> {
        let url = self.user_endpoint(user_id)?;
        send(self.request(Method::DELETE, url, self.admin_key())).await?;
        Ok(())
    }

    /// Insert the profile row of a freshly created account.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx provider answer.
    pub async fn insert_profile(&self, profile: &Profile) -> Result<(), Error> {
        self.insert(PROFILES_TABLE, profile).await
    }

    /// Insert the default settings row of a freshly created account.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx provider answer.
    pub async fn insert_settings(&self, settings: &Settings) -> Result<(), Error> {
        self.insert(SETTINGS_TABLE, settings).await
    }

    #[instrument(skip(self, row))]
    async fn insert<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<(), Error> {
        let url = self.endpoint(&format!("rest/v1/{table}"))?;
        send(
            self.request(Method::POST, url, self.admin_key())
                .header("Prefer", HeaderValue::from_static("return=minimal"))
                .json(row),
        )
        .await?;
        Ok(())
    }

    /// Probe the auth API health endpoint.
    ///
    /// # Errors
    /// Returns an error if the provider is unreachable or unhealthy.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<(), Error> {
        let url = self.endpoint("auth/v1/health")?;
        send(self.request(Method::GET, url, &self.api_key)).await?;
        Ok(())
    }
}

/// Send a request and decode its JSON body; an empty body decodes to `Null`.
async fn send(request: RequestBuilder) -> Result<Value, Error> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(Error::from_response(status, &body));
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
}
