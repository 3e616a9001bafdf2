use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::{exception::ServiceResult, model::entity::OrdreProduction};

#[async_trait]
pub trait ProductionService: Send + Sync {
    async fn production_orders(&self) -> ServiceResult<Vec<OrdreProduction>>;
    /// Production orders dated on or after the day of `now - 2h`.
    async fn recent_updates(&self, now: NaiveDateTime) -> ServiceResult<Vec<OrdreProduction>>;
}
