use std::sync::Arc;

use async_trait::async_trait;
use domain_notification::{
    model::{entity::Notification, vo::RemoteNotification},
    service::{NotificationStoreService, ReconcileService},
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct ReconcileServiceImpl {
    store: Arc<dyn NotificationStoreService>,
}

#[async_trait]
impl ReconcileService for ReconcileServiceImpl {
    async fn reconcile(&self, remote: &[RemoteNotification]) -> anyhow::Result<Vec<Notification>> {
        let local = remote.iter().map(RemoteNotification::to_local).collect::<Vec<_>>();
        if local.is_empty() {
            return Ok(local);
        }
        self.store.upsert_many(local.clone()).await?;
        tracing::debug!("Reconciled {} remote notifications", local.len());
        Ok(local)
    }
}
