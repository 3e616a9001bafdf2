use async_trait::async_trait;

use crate::model::vo::{Alert, AlertRequest};

/// Turns an alert request into a platform alert and shows it.
#[async_trait]
pub trait AlertPresenter: Send + Sync {
    /// Fire and forget: failures are logged, never returned.
    async fn present(&self, request: AlertRequest);
}

/// Platform specific display of an alert.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn raise(&self, alert: &Alert) -> anyhow::Result<()>;
}
