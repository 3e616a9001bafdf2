use std::sync::Arc;

use async_trait::async_trait;
use domain_business::exception::ApiResult;
use domain_notification::{
    model::{
        entity::Notification,
        vo::{NotificationQuery, NotificationSummary, RemoteNotification},
    },
    repository::NotificationSource,
    service::{Clock, NotificationService, NotificationStoreService, ReconcileService},
};
use futures::stream::BoxStream;
use typed_builder::TypedBuilder;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

#[derive(TypedBuilder)]
pub struct NotificationServiceImpl {
    source: Arc<dyn NotificationSource>,
    reconciler: Arc<dyn ReconcileService>,
    store: Arc<dyn NotificationStoreService>,
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn fetch_remote(&self, query: &NotificationQuery) -> ApiResult<Vec<RemoteNotification>> {
        let page = self.source.list(query).await?;
        self.reconciler.reconcile(&page.results).await?;
        Ok(page.results)
    }

    async fn remote_summary(&self) -> ApiResult<NotificationSummary> {
        self.source.summary().await
    }

    async fn mark_as_read_remote(&self, id: &str) -> ApiResult<()> {
        self.source.mark_as_read(id).await?;
        self.store.mark_as_read(id).await?;
        Ok(())
    }

    async fn mark_all_as_read_remote(&self) -> ApiResult<()> {
        self.source.mark_all_as_read().await?;
        self.store.mark_all_as_read().await?;
        Ok(())
    }

    async fn delete_remote(&self, id: &str) -> ApiResult<()> {
        self.source.delete(id).await?;
        self.store.delete(id).await?;
        Ok(())
    }

    async fn add(&self, notification: Notification) -> anyhow::Result<()> {
        self.store.upsert(notification).await
    }

    async fn mark_as_read(&self, id: &str) -> anyhow::Result<()> {
        self.store.mark_as_read(id).await
    }

    async fn mark_all_as_read(&self) -> anyhow::Result<()> {
        self.store.mark_all_as_read().await
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.store.delete(id).await
    }

    async fn delete_all(&self) -> anyhow::Result<()> {
        self.store.delete_all().await
    }

    async fn clean_old(&self, days_to_keep: u32) -> anyhow::Result<u64> {
        let cutoff = self.clock.now().timestamp_millis() - i64::from(days_to_keep) * DAY_MILLIS;
        let deleted = self.store.delete_older_than(cutoff).await?;
        if deleted > 0 {
            tracing::info!("Removed {deleted} notifications older than {days_to_keep} days");
        }
        Ok(deleted)
    }

    async fn observe_hybrid(&self) -> BoxStream<'static, anyhow::Result<Vec<Notification>>> {
        if let Err(e) = self.fetch_remote(&NotificationQuery::default()).await {
            tracing::warn!("Remote notification sync failed, showing local data: {e}");
        }
        self.store.observe_all()
    }

    async fn unread_count_hybrid(&self) -> anyhow::Result<u64> {
        match self.remote_summary().await {
            Ok(summary) => Ok(summary.unread_count),
            Err(e) => {
                tracing::warn!("Remote summary unavailable, counting locally: {e}");
                self.store.count_unread().await
            }
        }
    }
}
