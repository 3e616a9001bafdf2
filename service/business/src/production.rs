use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use domain_business::{
    exception::ServiceResult,
    model::{entity::OrdreProduction, vo::ListQuery},
    repository::RemoteRepository,
    service::ProductionService,
};
use typed_builder::TypedBuilder;

use crate::DATE_FORMAT;

const LOAD_PRODUCTION: &str = "Erreur lors du chargement des ordres de production";

#[derive(TypedBuilder)]
pub struct ProductionServiceImpl {
    production_repo: Arc<dyn RemoteRepository<OrdreProduction>>,
    /// How far back a production date still counts as a recent update.
    #[builder(default = Duration::hours(2))]
    recent_window: Duration,
}

#[async_trait]
impl ProductionService for ProductionServiceImpl {
    async fn production_orders(&self) -> ServiceResult<Vec<OrdreProduction>> {
        self.production_repo
            .fetch_all(&ListQuery::default())
            .await
            .map_err(|e| e.into_service(LOAD_PRODUCTION))
    }

    async fn recent_updates(&self, now: NaiveDateTime) -> ServiceResult<Vec<OrdreProduction>> {
        let since = (now - self.recent_window).date();
        let orders = self.production_orders().await?;
        Ok(orders
            .into_iter()
            .filter(|order| {
                let day = order.date_production.get(..10).unwrap_or(&order.date_production);
                match NaiveDate::parse_from_str(day, DATE_FORMAT) {
                    Ok(day) => day >= since,
                    Err(e) => {
                        tracing::warn!(
                            "Production order {} has an unreadable date {:?}: {e}",
                            order.id,
                            order.date_production
                        );
                        false
                    }
                }
            })
            .collect())
    }
}
