use async_trait::async_trait;

use crate::model::entity::Notification;

/// The local notification table, keyed by notification id.
#[async_trait]
pub trait NotificationRepo: Send + Sync {
    /// Insert, or replace the row with the same id.
    async fn upsert(&self, notification: &Notification) -> anyhow::Result<()>;
    /// Batch form of [`NotificationRepo::upsert`], in one transaction.
    async fn upsert_many(&self, notifications: &[Notification]) -> anyhow::Result<()>;
    /// Newest first.
    async fn get_all(&self) -> anyhow::Result<Vec<Notification>>;
    /// Newest first.
    async fn get_unread(&self) -> anyhow::Result<Vec<Notification>>;
    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Notification>>;
    async fn mark_as_read(&self, id: &str) -> anyhow::Result<()>;
    async fn mark_all_as_read(&self) -> anyhow::Result<()>;
    async fn delete_by_id(&self, id: &str) -> anyhow::Result<()>;
    async fn delete_all(&self) -> anyhow::Result<()>;
    /// Remove everything with a timestamp before `cutoff` (epoch millis).
    /// Returns the number of deleted rows.
    async fn delete_older_than(&self, cutoff: i64) -> anyhow::Result<u64>;
    async fn count_unread(&self) -> anyhow::Result<u64>;
}
