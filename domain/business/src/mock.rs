use crate::{
    exception::{ApiResult, ServiceResult},
    model::{
        entity::{Commande, DashboardStats, MatierePremiere, OrdreProduction, ProductionStats, User},
        vo::{Credentials, ListQuery, Page},
    },
    repository::{AuthRepo, DashboardRepo, RemoteRepository},
    service::{InventoryService, OrderService, ProductionService},
};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use mockall::mock;

mock! {
    pub OrderRepo {}
    #[async_trait]
    impl RemoteRepository<Commande> for OrderRepo {
        async fn list(&self, query: &ListQuery) -> ApiResult<Page<Commande>>;
        async fn get(&self, id: i64) -> ApiResult<Commande>;
        async fn create(&self, item: &Commande) -> ApiResult<Commande>;
        async fn update(&self, id: i64, item: &Commande) -> ApiResult<Commande>;
        async fn delete(&self, id: i64) -> ApiResult<()>;
    }
}

mock! {
    pub ProductionRepo {}
    #[async_trait]
    impl RemoteRepository<OrdreProduction> for ProductionRepo {
        async fn list(&self, query: &ListQuery) -> ApiResult<Page<OrdreProduction>>;
        async fn get(&self, id: i64) -> ApiResult<OrdreProduction>;
        async fn create(&self, item: &OrdreProduction) -> ApiResult<OrdreProduction>;
        async fn update(&self, id: i64, item: &OrdreProduction) -> ApiResult<OrdreProduction>;
        async fn delete(&self, id: i64) -> ApiResult<()>;
    }
}

mock! {
    pub StockRepo {}
    #[async_trait]
    impl RemoteRepository<MatierePremiere> for StockRepo {
        async fn list(&self, query: &ListQuery) -> ApiResult<Page<MatierePremiere>>;
        async fn get(&self, id: i64) -> ApiResult<MatierePremiere>;
        async fn create(&self, item: &MatierePremiere) -> ApiResult<MatierePremiere>;
        async fn update(&self, id: i64, item: &MatierePremiere) -> ApiResult<MatierePremiere>;
        async fn delete(&self, id: i64) -> ApiResult<()>;
    }
}

mock! {
    pub DashboardRepo {}
    #[async_trait]
    impl DashboardRepo for DashboardRepo {
        async fn stats(&self) -> ApiResult<DashboardStats>;
        async fn production_stats(&self) -> ApiResult<ProductionStats>;
    }
}

mock! {
    pub AuthRepo {}
    #[async_trait]
    impl AuthRepo for AuthRepo {
        async fn login(&self, credentials: &Credentials) -> ApiResult<User>;
        async fn current_user(&self) -> ApiResult<User>;
        async fn logout(&self) -> anyhow::Result<()>;
        async fn is_logged_in(&self) -> bool;
    }
}

mock! {
    pub OrderService {}
    #[async_trait]
    impl OrderService for OrderService {
        async fn list_orders(&self, query: &ListQuery) -> ServiceResult<Page<Commande>>;
        async fn get_order(&self, id: i64) -> ServiceResult<Commande>;
        async fn orders_between(&self, from: NaiveDate, to: NaiveDate) -> ServiceResult<Vec<Commande>>;
        async fn recent_orders(&self, today: NaiveDate) -> ServiceResult<Vec<Commande>>;
        async fn deliveries_on(&self, day: NaiveDate) -> ServiceResult<Vec<Commande>>;
    }
}

mock! {
    pub ProductionService {}
    #[async_trait]
    impl ProductionService for ProductionService {
        async fn production_orders(&self) -> ServiceResult<Vec<OrdreProduction>>;
        async fn recent_updates(&self, now: NaiveDateTime) -> ServiceResult<Vec<OrdreProduction>>;
    }
}

mock! {
    pub InventoryService {}
    #[async_trait]
    impl InventoryService for InventoryService {
        async fn materials(&self) -> ServiceResult<Vec<MatierePremiere>>;
        async fn low_stock_items(&self) -> ServiceResult<Vec<MatierePremiere>>;
    }
}
