use std::{future::Future, time::Duration};

use tokio::time::Instant;
use tracing::{debug, trace};

use crate::lag::Lag;

/// How an interruptible sleep ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slumber {
    Completed(Duration),
    Interrupted { planned: Duration, elapsed: Duration },
}

impl Slumber {
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Slumber::Interrupted { .. })
    }
}

impl Lag {
    /// Sleep for a freshly chosen duration and report what was chosen.
    pub async fn sleep(&self) -> Duration {
        let lag = self.duration();
        trace!("Sleeping for {:?} of {}", lag, self);
        if !lag.is_zero() {
            tokio::time::sleep(lag).await;
        }
        lag
    }

    /// Like `sleep`, but parks the current OS thread.
    pub fn sleep_blocking(&self) -> Duration {
        let lag = self.duration();
        trace!("Blocking for {:?} of {}", lag, self);
        if !lag.is_zero() {
            std::thread::sleep(lag);
        }
        lag
    }

    /// Sleep unless `interrupt` resolves first.
    pub async fn sleep_or_interrupt<F: Future>(&self, interrupt: F) -> Slumber {
        let planned = self.duration();
        let started = Instant::now();
        tokio::select! {
            biased;
            _ = interrupt => {
                let elapsed = started.elapsed();
                debug!("Interrupted after {:?} of {:?}", elapsed, planned);
                Slumber::Interrupted { planned, elapsed }
            }
            _ = tokio::time::sleep(planned) => Slumber::Completed(planned),
        }
    }
}
