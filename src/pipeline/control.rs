use super::Stage;
use crate::error::{Error, Result};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

/// Shared flag used to abort an in-flight run from another thread.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the running pipeline stops scheduling new work.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Scheduling guard checked before each stage and each unit of per-file work.
#[derive(Clone, Debug)]
pub struct RunControl {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RunControl {
    pub fn new(token: CancellationToken, timeout: Option<Duration>) -> Self {
        Self { token, deadline: timeout.map(|limit| Instant::now() + limit) }
    }

    /// Fails when the run has been cancelled or its deadline has passed.
    pub fn checkpoint(&self, stage: Stage) -> Result<()> {
        if self.token.is_cancelled() {
            return Err(Error::CancelledError { stage });
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(Error::TimeoutError { stage });
            }
        }
        Ok(())
    }
}
