//! PlanEats command-line client.

mod cli;
mod commands;

use std::collections::HashMap;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use planeats_application::{ApiClient, SessionProvider};
use planeats_infrastructure::{
    ClientConfig, FileSessionStore, ReqwestHttpClient, SealedSessionCodec, SystemClock,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::Context;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut vars: HashMap<String, String> = std::env::vars().collect();
    if let Some(url) = cli.api_url {
        vars.insert("PLANEATS_API_URL".to_string(), url);
    }
    let config = ClientConfig::from_vars(vars)?;

    let http = Arc::new(ReqwestHttpClient::new(config.request_timeout)?);
    let public = ApiClient::new(http, config.api_url.as_str());
    let session = Arc::new(SessionProvider::new(
        public.clone(),
        Arc::new(SealedSessionCodec::new(&config.session_secret)?),
        Arc::new(FileSessionStore::new(&config.data_dir)),
        Arc::new(SystemClock),
        config.session_ttl,
    ));
    let restored = session.hydrate().await;
    tracing::debug!(
        api_url = %config.api_url,
        session = %commands::describe(&restored),
        "client ready"
    );

    let api = public.with_credentials(session.clone());
    let ctx = Context {
        config,
        api,
        session,
    };
    commands::run(&ctx, cli.command).await
}
