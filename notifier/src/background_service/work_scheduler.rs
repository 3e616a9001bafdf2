use std::{panic::AssertUnwindSafe, sync::Arc, time::Duration};

use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use futures::FutureExt;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::Instrument;
use typed_builder::TypedBuilder;

use crate::infrastructure::service::DeviceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    Success,
    /// Run again after the backoff delay.
    Retry,
}

#[async_trait]
pub trait Job: Send + Sync {
    async fn run(&self) -> JobOutcome;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    pub network: bool,
    pub battery_not_low: bool,
}

impl Constraints {
    pub const CONNECTED: Constraints = Constraints {
        network: true,
        battery_not_low: false,
    };

    async fn satisfied_by(&self, device: &dyn DeviceState) -> bool {
        (!self.network || device.network_available().await)
            && (!self.battery_not_low || device.battery_not_low().await)
    }
}

/// Linear backoff: `initial × attempt`, capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub initial: Duration,
    pub max: Duration,
}

impl Backoff {
    pub fn delay(&self, attempt: u32) -> Duration {
        self.initial.saturating_mul(attempt.max(1)).min(self.max)
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            initial: Duration::from_secs(30),
            max: Duration::from_secs(5 * 60 * 60),
        }
    }
}

#[derive(TypedBuilder)]
pub struct PeriodicWork {
    job: Arc<dyn Job>,
    interval: Duration,
    #[builder(default)]
    constraints: Constraints,
    #[builder(default)]
    backoff: Backoff,
}

#[derive(TypedBuilder)]
pub struct OneShotWork {
    job: Arc<dyn Job>,
    #[builder(default)]
    constraints: Constraints,
    #[builder(default)]
    backoff: Backoff,
}

/// Named unique work, one task per name.
///
/// Periodic work keeps an existing live task of the same name; one-shot work
/// replaces it. Each attempt waits for its constraints, re-checking them
/// every `recheck`.
pub struct WorkScheduler {
    runner: Runner,
    works: DashMap<String, AbortHandle>,
}

#[derive(Clone)]
struct Runner {
    device: Arc<dyn DeviceState>,
    recheck: Duration,
}

impl WorkScheduler {
    pub fn new(device: Arc<dyn DeviceState>, recheck: Duration) -> Self {
        Self {
            runner: Runner { device, recheck },
            works: DashMap::new(),
        }
    }

    /// Returns `false` when a live work with that name was kept.
    pub fn enqueue_unique_periodic(&self, name: &str, work: PeriodicWork) -> bool {
        let start = || {
            let runner = self.runner.clone();
            tokio::spawn(
                async move {
                    loop {
                        runner.run_until_success(&work.job, work.constraints, work.backoff).await;
                        tokio::time::sleep(work.interval).await;
                    }
                }
                .instrument(tracing::trace_span!("periodic_work", work = name)),
            )
            .abort_handle()
        };
        match self.works.entry(name.to_string()) {
            Entry::Occupied(entry) if !entry.get().is_finished() => {
                tracing::debug!("Periodic work {name} already scheduled, keeping it");
                false
            }
            Entry::Occupied(mut entry) => {
                entry.insert(start());
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(start());
                true
            }
        }
    }

    /// Aborts any work with the same name and starts this one.
    pub fn enqueue_unique_one_shot(&self, name: &str, work: OneShotWork) -> JoinHandle<()> {
        let runner = self.runner.clone();
        let handle = tokio::spawn(
            async move {
                runner.run_until_success(&work.job, work.constraints, work.backoff).await;
            }
            .instrument(tracing::trace_span!("one_shot_work", work = name)),
        );
        if let Some(previous) = self.works.insert(name.to_string(), handle.abort_handle()) {
            tracing::debug!("Replacing one-shot work {name}");
            previous.abort();
        }
        handle
    }

    pub fn cancel_unique(&self, name: &str) -> bool {
        match self.works.remove(name) {
            Some((_, handle)) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn is_scheduled(&self, name: &str) -> bool {
        self.works.get(name).is_some_and(|h| !h.is_finished())
    }

    pub fn cancel_all(&self) {
        self.works.iter().for_each(|work| work.value().abort());
        self.works.clear();
    }
}

impl Runner {
    async fn run_until_success(&self, job: &Arc<dyn Job>, constraints: Constraints, backoff: Backoff) {
        let mut attempt = 0;
        loop {
            self.wait_for(constraints).await;
            attempt += 1;
            let outcome = match AssertUnwindSafe(job.run()).catch_unwind().await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::error!("Job panicked on attempt {attempt}");
                    JobOutcome::Retry
                }
            };
            if outcome == JobOutcome::Success {
                return;
            }
            let delay = backoff.delay(attempt);
            tracing::warn!("Job attempt {attempt} asked for a retry in {delay:?}");
            tokio::time::sleep(delay).await;
        }
    }

    async fn wait_for(&self, constraints: Constraints) {
        while !constraints.satisfied_by(self.device.as_ref()).await {
            tracing::debug!("Constraints {constraints:?} not met, checking again in {:?}", self.recheck);
            tokio::time::sleep(self.recheck).await;
        }
    }
}
