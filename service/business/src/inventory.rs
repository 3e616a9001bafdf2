use std::sync::Arc;

use async_trait::async_trait;
use domain_business::{
    exception::ServiceResult,
    model::{entity::MatierePremiere, vo::ListQuery},
    repository::RemoteRepository,
    service::InventoryService,
};
use typed_builder::TypedBuilder;

const LOAD_STOCK: &str = "Erreur lors du chargement du stock";

#[derive(TypedBuilder)]
pub struct InventoryServiceImpl {
    stock_repo: Arc<dyn RemoteRepository<MatierePremiere>>,
}

#[async_trait]
impl InventoryService for InventoryServiceImpl {
    async fn materials(&self) -> ServiceResult<Vec<MatierePremiere>> {
        self.stock_repo
            .fetch_all(&ListQuery::default())
            .await
            .map_err(|e| e.into_service(LOAD_STOCK))
    }

    async fn low_stock_items(&self) -> ServiceResult<Vec<MatierePremiere>> {
        Ok(self
            .materials()
            .await?
            .into_iter()
            .filter(MatierePremiere::is_low)
            .collect())
    }
}
