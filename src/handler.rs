use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::{
    environment::Environment,
    http_client::reqwest_http_client::{DEFAULT_REQUEST_TIMEOUT, ReqwestHttpClient},
    poller::{
        poller::Poller,
        timed_poller::{DEFAULT_ITERATION_BOUND, DEFAULT_PAUSE, TimedPoller},
    },
};

#[derive(Debug, Serialize)]
pub struct Output {
    pub iterations: u32,
}

/// Lambda entry point. The event payload and context only trigger the
/// invocation; the polling target comes from the environment.
pub async fn handler(_event: LambdaEvent<Value>) -> Result<Output, Error> {
    let environment = Environment::from_env()?;

    info!("Base url: {}", environment.auth_url);

    let http_client = Arc::new(ReqwestHttpClient::default());
    let poller = TimedPoller::new(
        http_client,
        &environment.auth_url,
        DEFAULT_ITERATION_BOUND,
        DEFAULT_PAUSE,
        DEFAULT_REQUEST_TIMEOUT,
    );

    run_poller(&poller).await
}

pub async fn run_poller(poller: &dyn Poller) -> Result<Output, Error> {
    let iterations = poller.execute().await?;

    Ok(Output { iterations })
}
