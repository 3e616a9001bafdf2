use std::sync::Arc;

use async_trait::async_trait;
use domain_notification::service::{NotificationService, PollService};
use tracing::Instrument;

use super::{Job, JobOutcome};

pub const NOTIFICATION_CHECK_WORK: &str = "notification_check_work";
pub const NOTIFICATION_CHECK_WORK_ONE_SHOT: &str = "notification_check_work_one_shot";
pub const RETENTION_WORK: &str = "notification_retention_work";

/// One poll run; only an error escaping the poll asks for a retry.
pub struct NotificationCheckJob {
    poll: Arc<dyn PollService>,
}

impl NotificationCheckJob {
    pub fn new(poll: Arc<dyn PollService>) -> Self {
        Self { poll }
    }
}

#[async_trait]
impl Job for NotificationCheckJob {
    async fn run(&self) -> JobOutcome {
        let result = self
            .poll
            .poll()
            .instrument(tracing::trace_span!("notification_check"))
            .await;
        match result {
            Ok(report) => {
                if !report.is_clean() {
                    tracing::warn!("Notification check skipped steps: {:?}", report.failed_steps);
                }
                JobOutcome::Success
            }
            Err(e) => {
                tracing::error!("Notification check failed: {e}");
                JobOutcome::Retry
            }
        }
    }
}

/// Drops local notifications older than the retention window.
pub struct RetentionJob {
    notifications: Arc<dyn NotificationService>,
    days_to_keep: u32,
}

impl RetentionJob {
    pub fn new(notifications: Arc<dyn NotificationService>, days_to_keep: u32) -> Self {
        Self {
            notifications,
            days_to_keep,
        }
    }
}

#[async_trait]
impl Job for RetentionJob {
    async fn run(&self) -> JobOutcome {
        match self.notifications.clean_old(self.days_to_keep).await {
            Ok(_) => JobOutcome::Success,
            Err(e) => {
                tracing::error!("Retention sweep failed: {e}");
                JobOutcome::Retry
            }
        }
    }
}
