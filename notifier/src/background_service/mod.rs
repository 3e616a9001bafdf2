mod notification_check;
mod work_scheduler;

#[rustfmt::skip]
pub use {
    notification_check::{
        NotificationCheckJob, RetentionJob, NOTIFICATION_CHECK_WORK,
        NOTIFICATION_CHECK_WORK_ONE_SHOT, RETENTION_WORK,
    },
    work_scheduler::{
        Backoff, Constraints, Job, JobOutcome, OneShotWork, PeriodicWork, WorkScheduler,
    },
};
