use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use domain_business::{
    exception::ServiceResult,
    model::{
        entity::Commande,
        vo::{ListQuery, Page},
    },
    repository::RemoteRepository,
    service::OrderService,
};
use typed_builder::TypedBuilder;

use crate::DATE_FORMAT;

const LOAD_ORDERS: &str = "Erreur lors du chargement des commandes";
const LOAD_ORDER: &str = "Erreur lors du chargement de la commande";
const LOAD_DELIVERIES: &str = "Erreur lors du chargement des livraisons";

#[derive(TypedBuilder)]
pub struct OrderServiceImpl {
    order_repo: Arc<dyn RemoteRepository<Commande>>,
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    async fn list_orders(&self, query: &ListQuery) -> ServiceResult<Page<Commande>> {
        self.order_repo
            .list(query)
            .await
            .map_err(|e| e.into_service(LOAD_ORDERS))
    }

    async fn get_order(&self, id: i64) -> ServiceResult<Commande> {
        self.order_repo
            .get(id)
            .await
            .map_err(|e| e.into_service(LOAD_ORDER))
    }

    async fn orders_between(&self, from: NaiveDate, to: NaiveDate) -> ServiceResult<Vec<Commande>> {
        let query = ListQuery::default()
            .filter("date_commande_after", from.format(DATE_FORMAT))
            .filter("date_commande_before", to.format(DATE_FORMAT));
        self.order_repo
            .fetch_all(&query)
            .await
            .map_err(|e| e.into_service(LOAD_ORDERS))
    }

    async fn recent_orders(&self, today: NaiveDate) -> ServiceResult<Vec<Commande>> {
        self.orders_between(today - Duration::days(1), today).await
    }

    async fn deliveries_on(&self, day: NaiveDate) -> ServiceResult<Vec<Commande>> {
        let day = day.format(DATE_FORMAT).to_string();
        let orders = self
            .order_repo
            .fetch_all(&ListQuery::default())
            .await
            .map_err(|e| e.into_service(LOAD_DELIVERIES))?;
        Ok(orders
            .into_iter()
            .filter(|order| order.is_delivered_on(&day))
            .collect())
    }
}
