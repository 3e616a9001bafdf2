use async_trait::async_trait;
use domain_business::{
    exception::ApiResult,
    model::entity::{DashboardStats, ProductionStats},
    repository::DashboardRepo,
};

use super::ApiClient;

#[async_trait]
impl DashboardRepo for ApiClient {
    async fn stats(&self) -> ApiResult<DashboardStats> {
        self.get_json("dashboard/stats/", &[]).await
    }

    async fn production_stats(&self) -> ApiResult<ProductionStats> {
        self.get_json("dashboard/production-stats/", &[]).await
    }
}
