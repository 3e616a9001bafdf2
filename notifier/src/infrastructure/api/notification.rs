use async_trait::async_trait;
use domain_business::{exception::ApiResult, model::vo::Page};
use domain_notification::{
    model::vo::{NotificationQuery, NotificationSummary, RemoteNotification},
    repository::NotificationSource,
};
use reqwest::Method;

use super::ApiClient;

const NOTIFICATIONS_PATH: &str = "notifications/";

#[async_trait]
impl NotificationSource for ApiClient {
    async fn list(&self, query: &NotificationQuery) -> ApiResult<Page<RemoteNotification>> {
        self.get_json(NOTIFICATIONS_PATH, &query.to_pairs()).await
    }

    async fn summary(&self) -> ApiResult<NotificationSummary> {
        self.get_json(&format!("{NOTIFICATIONS_PATH}summary/"), &[])
            .await
    }

    async fn mark_as_read(&self, id: &str) -> ApiResult<()> {
        self.send_empty(
            Method::POST,
            &format!("{NOTIFICATIONS_PATH}{id}/mark_as_read/"),
        )
        .await
    }

    async fn mark_all_as_read(&self) -> ApiResult<()> {
        self.send_empty(
            Method::POST,
            &format!("{NOTIFICATIONS_PATH}mark_all_as_read/"),
        )
        .await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.send_empty(Method::DELETE, &format!("{NOTIFICATIONS_PATH}{id}/"))
            .await
    }
}
