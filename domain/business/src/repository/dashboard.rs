use async_trait::async_trait;

use crate::{
    exception::ApiResult,
    model::entity::{DashboardStats, ProductionStats},
};

#[async_trait]
pub trait DashboardRepo: Send + Sync {
    async fn stats(&self) -> ApiResult<DashboardStats>;
    async fn production_stats(&self) -> ApiResult<ProductionStats>;
}
