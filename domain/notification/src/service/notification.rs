use async_trait::async_trait;
use domain_business::exception::ApiResult;
use futures::stream::BoxStream;

use crate::model::{
    entity::Notification,
    vo::{NotificationQuery, NotificationSummary, RemoteNotification},
};

/// Remote and local notifications behind one facade.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Fetch one page from the backend and reconcile it locally.
    async fn fetch_remote(&self, query: &NotificationQuery) -> ApiResult<Vec<RemoteNotification>>;
    async fn remote_summary(&self) -> ApiResult<NotificationSummary>;
    async fn mark_as_read_remote(&self, id: &str) -> ApiResult<()>;
    async fn mark_all_as_read_remote(&self) -> ApiResult<()>;
    async fn delete_remote(&self, id: &str) -> ApiResult<()>;

    async fn add(&self, notification: Notification) -> anyhow::Result<()>;
    async fn mark_as_read(&self, id: &str) -> anyhow::Result<()>;
    async fn mark_all_as_read(&self) -> anyhow::Result<()>;
    async fn delete(&self, id: &str) -> anyhow::Result<()>;
    async fn delete_all(&self) -> anyhow::Result<()>;
    /// Drop local notifications older than `days_to_keep` days.
    async fn clean_old(&self, days_to_keep: u32) -> anyhow::Result<u64>;

    /// Try a remote sync, then follow the local list whatever the sync gave.
    async fn observe_hybrid(&self) -> BoxStream<'static, anyhow::Result<Vec<Notification>>>;
    /// Remote unread count, or the local one when the backend is unreachable.
    async fn unread_count_hybrid(&self) -> anyhow::Result<u64>;
}
