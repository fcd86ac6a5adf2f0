/// The single failure kind of the fail-fast polling loop: the iteration the
/// loop stopped at plus a reason.
#[derive(Debug, thiserror::Error)]
#[error("Polling failed at iteration {iteration}: {reason}")]
pub struct PollFailure {
    pub iteration: u32,
    pub reason: String,
}

impl PollFailure {
    pub fn new(iteration: u32, reason: impl Into<String>) -> Self {
        Self {
            iteration,
            reason: reason.into(),
        }
    }
}
