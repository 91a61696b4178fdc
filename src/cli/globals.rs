use secrecy::SecretString;

/// Origins allowed to call the API from a browser unless configured otherwise.
pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://127.0.0.1:5500",
    "http://localhost:5500",
];

/// Process-wide configuration, built once at startup and shared read-only.
#[derive(Clone)]
pub struct GlobalArgs {
    pub provider_url: String,
    pub provider_key: SecretString,
    pub provider_service_key: Option<SecretString>,
    pub cors_origins: Vec<String>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(provider_url: String, provider_key: SecretString) -> Self {
        Self {
            provider_url,
            provider_key,
            provider_service_key: None,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn set_service_key(&mut self, key: SecretString) {
        self.provider_service_key = Some(key);
    }

    pub fn set_cors_origins(&mut self, origins: Vec<String>) {
        self.cors_origins = origins;
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("provider_url", &self.provider_url)
            .field("provider_key", &"***")
            .field(
                "provider_service_key",
                &self.provider_service_key.as_ref().map(|_| "***"),
            )
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}
