use std::{sync::Arc, time::Duration};

use colored::Colorize;

use crate::{
    background_service::{
        Constraints, NotificationCheckJob, OneShotWork, PeriodicWork, RetentionJob,
        NOTIFICATION_CHECK_WORK, NOTIFICATION_CHECK_WORK_ONE_SHOT, RETENTION_WORK,
    },
    infrastructure::service_provider::ServiceProvider,
};

const RETENTION_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Schedule the background work and wait for ctrl-c.
pub async fn run(provider: Arc<ServiceProvider>) -> anyhow::Result<()> {
    let scheduler = provider.scheduler.clone();
    scheduler.enqueue_unique_periodic(
        NOTIFICATION_CHECK_WORK,
        PeriodicWork::builder()
            .job(Arc::new(NotificationCheckJob::new(provider.poll.clone())))
            .interval(Duration::from_secs(provider.config.poller.interval_secs))
            .constraints(Constraints {
                network: true,
                battery_not_low: true,
            })
            .backoff(provider.backoff())
            .build(),
    );
    scheduler.enqueue_unique_periodic(
        RETENTION_WORK,
        PeriodicWork::builder()
            .job(Arc::new(RetentionJob::new(
                provider.notifications.clone(),
                provider.config.storage.retention_days,
            )))
            .interval(RETENTION_INTERVAL)
            .backoff(provider.backoff())
            .build(),
    );
    println!("{}", "Beton notifier started.".green());

    tokio::signal::ctrl_c().await?;
    tracing::info!("Stopping background work (ctrl-c handling).");
    scheduler.cancel_all();
    Ok(())
}

/// Run one notification check and wait for it, retrying like the periodic work.
pub async fn sync(provider: Arc<ServiceProvider>) -> anyhow::Result<()> {
    let scheduler = provider.scheduler.clone();
    let handle = scheduler.enqueue_unique_one_shot(
        NOTIFICATION_CHECK_WORK_ONE_SHOT,
        OneShotWork::builder()
            .job(Arc::new(NotificationCheckJob::new(provider.poll.clone())))
            .constraints(Constraints::CONNECTED)
            .backoff(provider.backoff())
            .build(),
    );
    tokio::select! {
        done = handle => done?,
        interrupted = tokio::signal::ctrl_c() => {
            interrupted?;
            scheduler.cancel_unique(NOTIFICATION_CHECK_WORK_ONE_SHOT);
            anyhow::bail!("Synchronisation interrompue");
        }
    }
    let unread = provider.store.count_unread().await?;
    println!("{} {unread} notification(s) non lue(s)", "Synchronisation terminée.".green());
    Ok(())
}
