use async_trait::async_trait;

use crate::{exception::ServiceResult, model::entity::MatierePremiere};

#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn materials(&self) -> ServiceResult<Vec<MatierePremiere>>;
    /// Materials at or below their (positive) minimum stock.
    async fn low_stock_items(&self) -> ServiceResult<Vec<MatierePremiere>>;
}
