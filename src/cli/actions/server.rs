use crate::{api, cli::globals::GlobalArgs};
use anyhow::Result;
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub provider_url: String,
    pub provider_key: SecretString,
    pub provider_service_key: Option<SecretString>,
    pub cors_origins: Vec<String>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the provider client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let mut globals = GlobalArgs::new(args.provider_url, args.provider_key);

    if let Some(key) = args.provider_service_key {
        globals.set_service_key(key);
    }

    if !args.cors_origins.is_empty() {
        globals.set_cors_origins(args.cors_origins);
    }

    debug!("Global args: {:?}", globals);

    api::new(args.port, &globals).await
}
