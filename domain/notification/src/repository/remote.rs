use async_trait::async_trait;
use domain_business::{exception::ApiResult, model::vo::Page};

use crate::model::vo::{NotificationQuery, NotificationSummary, RemoteNotification};

/// The backend's `notifications/` endpoints.
#[async_trait]
pub trait NotificationSource: Send + Sync {
    async fn list(&self, query: &NotificationQuery) -> ApiResult<Page<RemoteNotification>>;
    async fn summary(&self) -> ApiResult<NotificationSummary>;
    async fn mark_as_read(&self, id: &str) -> ApiResult<()>;
    async fn mark_all_as_read(&self) -> ApiResult<()>;
    async fn delete(&self, id: &str) -> ApiResult<()>;
}
