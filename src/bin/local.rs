use clap::Parser;
use repeater::cli_arguments::CliArguments;
use repeater::http_client::reqwest_http_client::{DEFAULT_REQUEST_TIMEOUT, ReqwestHttpClient};
use repeater::poller::poller::Poller;
use repeater::poller::timed_poller::TimedPoller;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    let poller = TimedPoller::new(
        Arc::new(ReqwestHttpClient::default()),
        &args.base_url,
        args.iteration_bound,
        Duration::from_millis(args.pause_millis),
        DEFAULT_REQUEST_TIMEOUT,
    );

    let iterations = poller.execute().await?;

    info!("Done after {} requests", iterations);

    Ok(())
}
