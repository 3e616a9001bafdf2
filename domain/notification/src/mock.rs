use crate::{
    model::{
        entity::Notification,
        vo::{Alert, AlertRequest, NotificationQuery, NotificationSummary, PollReport, RemoteNotification},
    },
    repository::{NotificationRepo, NotificationSource},
    service::{
        AlertPresenter, AlertSink, Clock, NotificationService, NotificationStoreService,
        PollService, ReconcileService,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use domain_business::{exception::ApiResult, model::vo::Page};
use futures::stream::BoxStream;
use mockall::mock;

mock! {
    pub NotificationRepo {}
    #[async_trait]
    impl NotificationRepo for NotificationRepo {
        async fn upsert(&self, notification: &Notification) -> anyhow::Result<()>;
        async fn upsert_many(&self, notifications: &[Notification]) -> anyhow::Result<()>;
        async fn get_all(&self) -> anyhow::Result<Vec<Notification>>;
        async fn get_unread(&self) -> anyhow::Result<Vec<Notification>>;
        async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Notification>>;
        async fn mark_as_read(&self, id: &str) -> anyhow::Result<()>;
        async fn mark_all_as_read(&self) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: &str) -> anyhow::Result<()>;
        async fn delete_all(&self) -> anyhow::Result<()>;
        async fn delete_older_than(&self, cutoff: i64) -> anyhow::Result<u64>;
        async fn count_unread(&self) -> anyhow::Result<u64>;
    }
}

mock! {
    pub NotificationSource {}
    #[async_trait]
    impl NotificationSource for NotificationSource {
        async fn list(&self, query: &NotificationQuery) -> ApiResult<Page<RemoteNotification>>;
        async fn summary(&self) -> ApiResult<NotificationSummary>;
        async fn mark_as_read(&self, id: &str) -> ApiResult<()>;
        async fn mark_all_as_read(&self) -> ApiResult<()>;
        async fn delete(&self, id: &str) -> ApiResult<()>;
    }
}

mock! {
    pub NotificationStoreService {}
    #[async_trait]
    impl NotificationStoreService for NotificationStoreService {
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
}

mock! {
    pub ReconcileService {}
    #[async_trait]
    impl ReconcileService for ReconcileService {
        async fn reconcile(&self, remote: &[RemoteNotification]) -> anyhow::Result<Vec<Notification>>;
    }
}

mock! {
    pub NotificationService {}
    #[async_trait]
    impl NotificationService for NotificationService {
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
        async fn clean_old(&self, days_to_keep: u32) -> anyhow::Result<u64>;
        async fn observe_hybrid(&self) -> BoxStream<'static, anyhow::Result<Vec<Notification>>>;
        async fn unread_count_hybrid(&self) -> anyhow::Result<u64>;
    }
}

mock! {
    pub AlertPresenter {}
    #[async_trait]
    impl AlertPresenter for AlertPresenter {
        async fn present(&self, request: AlertRequest);
    }
}

mock! {
    pub AlertSink {}
    #[async_trait]
    impl AlertSink for AlertSink {
        async fn raise(&self, alert: &Alert) -> anyhow::Result<()>;
    }
}

mock! {
    pub PollService {}
    #[async_trait]
    impl PollService for PollService {
        async fn poll(&self) -> anyhow::Result<PollReport>;
    }
}

mock! {
    pub Clock {}
    impl Clock for Clock {
        fn now(&self) -> DateTime<Local>;
    }
}
