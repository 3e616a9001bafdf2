use std::sync::Arc;

use async_trait::async_trait;
use domain_notification::{
    model::vo::{Alert, AlertRequest, Urgency},
    service::{AlertPresenter, AlertSink},
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct AlertPresenterImpl {
    sinks: Vec<Arc<dyn AlertSink>>,
}

impl AlertPresenterImpl {
    /// Pick channel, urgency, deep link and id for a request.
    pub fn resolve(request: AlertRequest) -> Alert {
        Alert {
            id: request.kind.alert_id(),
            channel: request.kind.channel(),
            urgency: Urgency::from_priority(&request.priority),
            deep_link: request.kind.deep_link(),
            title: request.title,
            message: request.message,
            detail: request.detail,
            when: request.when,
        }
    }
}

#[async_trait]
impl AlertPresenter for AlertPresenterImpl {
    async fn present(&self, request: AlertRequest) {
        let alert = Self::resolve(request);
        for sink in self.sinks.iter() {
            if let Err(e) = sink.raise(&alert).await {
                tracing::error!("Failed to raise alert {} on {}: {e}", alert.id, alert.channel.id());
            }
        }
    }
}
