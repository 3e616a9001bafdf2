use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    exception::ServiceResult,
    model::{
        entity::Commande,
        vo::{ListQuery, Page},
    },
};

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn list_orders(&self, query: &ListQuery) -> ServiceResult<Page<Commande>>;
    async fn get_order(&self, id: i64) -> ServiceResult<Commande>;
    /// Orders placed between `from` and `to`, both inclusive.
    async fn orders_between(&self, from: NaiveDate, to: NaiveDate) -> ServiceResult<Vec<Commande>>;
    /// Orders placed since yesterday.
    async fn recent_orders(&self, today: NaiveDate) -> ServiceResult<Vec<Commande>>;
    /// Orders whose planned delivery falls on `day`.
    async fn deliveries_on(&self, day: NaiveDate) -> ServiceResult<Vec<Commande>>;
}
