use async_trait::async_trait;

use crate::model::vo::PollReport;

/// One run of the periodic notification check.
#[async_trait]
pub trait PollService: Send + Sync {
    /// Runs every step. A failing step is logged and recorded in the report;
    /// only errors outside the steps are returned.
    async fn poll(&self) -> anyhow::Result<PollReport>;
}
