use async_trait::async_trait;
use domain_notification::{model::vo::Alert, service::AlertSink};
use tokio::process::Command;

/// Writes every alert to the log.
pub struct LogAlertSink;

#[async_trait]
impl AlertSink for LogAlertSink {
    async fn raise(&self, alert: &Alert) -> anyhow::Result<()> {
        let link = alert
            .deep_link
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        tracing::info!(
            id = alert.id,
            channel = alert.channel.id(),
            urgency = alert.urgency.as_str(),
            link = %link,
            "{}: {}",
            alert.title,
            alert.message
        );
        Ok(())
    }
}

/// Desktop notification through `notify-send`.
pub struct NotifySendSink {
    program: String,
    app_name: String,
}

impl NotifySendSink {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            program: "notify-send".to_string(),
            app_name: app_name.into(),
        }
    }
}

#[async_trait]
impl AlertSink for NotifySendSink {
    async fn raise(&self, alert: &Alert) -> anyhow::Result<()> {
        let body = alert.detail.as_deref().unwrap_or(&alert.message);
        let out = Command::new(&self.program)
            .arg("-u")
            .arg(alert.urgency.as_str())
            .arg("-a")
            .arg(&self.app_name)
            .arg("-c")
            .arg(alert.channel.id())
            .arg(&alert.title)
            .arg(body)
            .output()
            .await?;
        if !out.status.success() {
            anyhow::bail!(
                "{} exited with {}: {}",
                self.program,
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            );
        }
        Ok(())
    }
}
