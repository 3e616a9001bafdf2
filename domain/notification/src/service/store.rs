use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::model::entity::Notification;

/// The local store plus live views over it.
///
/// Every write wakes the observers, which re-query and emit the new result.
#[async_trait]
pub trait NotificationStoreService: Send + Sync {
    async fn upsert(&self, notification: Notification) -> anyhow::Result<()>;
    async fn upsert_many(&self, notifications: Vec<Notification>) -> anyhow::Result<()>;
    async fn get_all(&self) -> anyhow::Result<Vec<Notification>>;
    async fn get_unread(&self) -> anyhow::Result<Vec<Notification>>;
    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Notification>>;
    async fn mark_as_read(&self, id: &str) -> anyhow::Result<()>;
    async fn mark_all_as_read(&self) -> anyhow::Result<()>;
    async fn delete(&self, id: &str) -> anyhow::Result<()>;
    async fn delete_all(&self) -> anyhow::Result<()>;
    async fn delete_older_than(&self, cutoff: i64) -> anyhow::Result<u64>;
    async fn count_unread(&self) -> anyhow::Result<u64>;

    fn observe_all(&self) -> BoxStream<'static, anyhow::Result<Vec<Notification>>>;
    fn observe_unread(&self) -> BoxStream<'static, anyhow::Result<Vec<Notification>>>;
    fn observe_unread_count(&self) -> BoxStream<'static, anyhow::Result<u64>>;
}
