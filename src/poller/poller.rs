use async_trait::async_trait;

use crate::poller::error::PollFailure;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Poller: Send + Sync {
    /// Runs the polling loop to completion, returning the number of
    /// successful requests, or the first failure encountered.
    async fn execute(&self) -> Result<u32, PollFailure>;
}
