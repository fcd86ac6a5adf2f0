use async_trait::async_trait;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tokio::time;
use tracing::{info, warn};

use crate::{
    http_client::{
        http_client::HttpClient,
        request::{Request, RequestHeaders},
    },
    poller::{error::PollFailure, poller::Poller},
};

/// Fixed path suffix appended to the configured base URL.
pub const SEND_ENDPOINT: &str = "/send/";

/// Exclusive upper bound of the iteration counter. At one request per second
/// this keeps an invocation busy for roughly four minutes.
pub const DEFAULT_ITERATION_BOUND: u32 = 5 * 60;

/// Pause between consecutive requests.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

pub struct TimedPoller {
    pub http_client: Arc<dyn HttpClient>,
    pub target_url: String,
    pub iteration_bound: u32,
    pub pause: Duration,
    pub request_timeout: Duration,
}

impl TimedPoller {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        base_url: &str,
        iteration_bound: u32,
        pause: Duration,
        request_timeout: Duration,
    ) -> Self {
        Self {
            http_client,
            target_url: format!("{}{}", base_url, SEND_ENDPOINT),
            iteration_bound,
            pause,
            request_timeout,
        }
    }

    async fn poll_once(&self, iteration: u32) -> Result<(), PollFailure> {
        let request = Request {
            url: self.target_url.clone(),
            headers: RequestHeaders::from([(
                "accept".to_string(),
                "application/json".to_string(),
            )]),
        };

        let response =
            match time::timeout(self.request_timeout, self.http_client.execute(request)).await {
                Ok(Ok(response)) => response,
                Ok(Err(error)) => {
                    warn!("Request {} failed: {}", iteration, error);
                    return Err(PollFailure::new(iteration, error.to_string()));
                }
                Err(_) => {
                    warn!("Request {} timed out", iteration);
                    return Err(PollFailure::new(iteration, "Request timed out"));
                }
            };

        if !(200..300).contains(&response.status) {
            warn!(
                "Request {} returned status {}",
                iteration, response.status
            );
            return Err(PollFailure::new(
                iteration,
                format!("Unexpected status {}", response.status),
            ));
        }

        let payload: Value = serde_json::from_slice(&response.body).map_err(|error| {
            warn!("Request {} returned a non-JSON body: {}", iteration, error);
            PollFailure::new(iteration, format!("Undecodable body: {}", error))
        })?;

        info!("#{} Status: {}", iteration, response.status);
        info!("Response: {}", payload);

        Ok(())
    }
}

#[async_trait]
impl Poller for TimedPoller {
    async fn execute(&self) -> Result<u32, PollFailure> {
        info!(
            "Polling {} every {:?} with a {:?} request timeout",
            self.target_url, self.pause, self.request_timeout
        );

        let mut completed = 0;

        for iteration in 1..self.iteration_bound {
            self.poll_once(iteration).await?;
            completed += 1;

            time::sleep(self.pause).await;
        }

        info!("Completed {} requests against {}", completed, self.target_url);

        Ok(completed)
    }
}
