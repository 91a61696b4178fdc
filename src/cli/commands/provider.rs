use anyhow::{Context, Result};
use clap::{Arg, Command};
use secrecy::SecretString;

pub const ARG_PROVIDER_URL: &str = "provider-url";
pub const ARG_PROVIDER_KEY: &str = "provider-key";
pub const ARG_PROVIDER_SERVICE_KEY: &str = "provider-service-key";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_PROVIDER_URL)
                .long(ARG_PROVIDER_URL)
                .help("Identity provider base URL, example: https://<project>.supabase.co")
                .env("WAYPOINT_PROVIDER_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PROVIDER_KEY)
                .long(ARG_PROVIDER_KEY)
                .help("Identity provider public (anon) API key")
                .env("WAYPOINT_PROVIDER_KEY")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_PROVIDER_SERVICE_KEY)
                .long(ARG_PROVIDER_SERVICE_KEY)
                .help("Identity provider service-role key, used for admin lookups and table writes")
                .long_help(
                    "Identity provider service-role key. Admin lookups and profile/settings writes use it when set, otherwise they fall back to the public key.",
                )
                .env("WAYPOINT_PROVIDER_SERVICE_KEY")
                .hide_env_values(true),
        )
}

#[derive(Debug)]
pub struct Options {
    pub url: String,
    pub key: SecretString,
    pub service_key: Option<SecretString>,
}

impl Options {
    /// Read the provider arguments.
    ///
    /// # Errors
    /// Returns an error if a required argument is missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let url = matches
            .get_one::<String>(ARG_PROVIDER_URL)
            .cloned()
            .context("missing required argument: --provider-url")?;
        let key = matches
            .get_one::<String>(ARG_PROVIDER_KEY)
            .cloned()
            .map(SecretString::from)
            .context("missing required argument: --provider-key")?;
        let service_key = matches
            .get_one::<String>(ARG_PROVIDER_SERVICE_KEY)
            .cloned()
            .map(SecretString::from);

        Ok(Self {
            url,
            key,
            service_key,
        })
    }
}
