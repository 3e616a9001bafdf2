use async_trait::async_trait;

use crate::model::{entity::Notification, vo::RemoteNotification};

#[async_trait]
pub trait ReconcileService: Send + Sync {
    /// Upsert remote notifications into the local store in one batch and
    /// return their local form. Nothing is ever removed.
    async fn reconcile(&self, remote: &[RemoteNotification]) -> anyhow::Result<Vec<Notification>>;
}
