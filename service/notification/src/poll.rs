use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use domain_business::{
    model::vo::MAX_PAGES,
    service::{InventoryService, OrderService, ProductionService},
};
use domain_notification::{
    model::{
        entity::Notification,
        vo::{AlertRequest, Category, NotificationQuery, PollReport},
    },
    repository::NotificationSource,
    service::{AlertPresenter, Clock, NotificationStoreService, PollService, ReconcileService},
};
use typed_builder::TypedBuilder;

const UNKNOWN_CLIENT: &str = "Client inconnu";

/// Checks the backend for anything worth an alert.
///
/// Business events get a local record with a deterministic id
/// (`order_12`, `production_4`, ...). An event whose record already exists
/// has been alerted before and is skipped.
#[derive(TypedBuilder)]
pub struct PollServiceImpl {
    source: Arc<dyn NotificationSource>,
    reconciler: Arc<dyn ReconcileService>,
    store: Arc<dyn NotificationStoreService>,
    orders: Arc<dyn OrderService>,
    production: Arc<dyn ProductionService>,
    inventory: Arc<dyn InventoryService>,
    presenter: Arc<dyn AlertPresenter>,
    clock: Arc<dyn Clock>,
}

impl PollServiceImpl {
    /// Unread backend notifications, reconciled; only the unseen ones alert.
    async fn sync_remote(&self, report: &mut PollReport) -> anyhow::Result<usize> {
        let mut query = NotificationQuery::unread();
        let mut remote = vec![];
        for page_number in 1..=MAX_PAGES {
            query.page = Some(page_number);
            let page = self.source.list(&query).await?;
            let more = page.should_continue();
            remote.extend(page.results);
            if !more {
                break;
            }
            if page_number == MAX_PAGES {
                tracing::warn!("Stopped reading remote notifications after {MAX_PAGES} pages");
            }
        }

        let mut unseen = vec![];
        for notification in remote.iter() {
            if self.store.get_by_id(&notification.id.0).await?.is_none() {
                unseen.push(notification);
            }
        }
        report.synced = self.reconciler.reconcile(&remote).await?.len();
        for notification in unseen.iter() {
            self.presenter.present(AlertRequest::remote(notification)).await;
        }
        Ok(unseen.len())
    }

    async fn check_new_orders(&self, now: DateTime<Local>) -> anyhow::Result<usize> {
        let mut alerted = 0;
        for order in self.orders.recent_orders(now.date_naive()).await? {
            let id = format!("order_{}", order.id);
            if self.store.get_by_id(&id).await?.is_some() {
                continue;
            }
            let number = order.numero.clone().unwrap_or_else(|| "N/A".to_string());
            let client = order
                .client_nom
                .clone()
                .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());
            let record = Notification::new(
                id,
                "Nouvelle commande",
                format!("Commande {number} de {client}"),
                Category::NewOrder,
                now.timestamp_millis(),
            )
            .related_to("commande", order.id)
            .with_priority("medium");
            self.store.upsert(record).await?;
            self.presenter
                .present(AlertRequest::new_order(&number, &client))
                .await;
            alerted += 1;
        }
        Ok(alerted)
    }

    async fn check_production(&self, now: DateTime<Local>) -> anyhow::Result<usize> {
        let mut alerted = 0;
        let recent = self.production.recent_updates(now.naive_local()).await?;
        for production in recent.into_iter().filter(|p| p.is_ready()) {
            let id = format!("production_{}", production.id);
            if self.store.get_by_id(&id).await?.is_some() {
                continue;
            }
            let record = Notification::new(
                id,
                "Production prête",
                format!("La production #{} est prête pour livraison", production.id),
                Category::ProductionUpdate,
                now.timestamp_millis(),
            )
            .related_to("production", production.id)
            .with_priority("high");
            self.store.upsert(record).await?;
            self.presenter
                .present(AlertRequest::production_update(
                    &production.id.to_string(),
                    "PRET",
                ))
                .await;
            alerted += 1;
        }
        Ok(alerted)
    }

    async fn check_low_inventory(&self, now: DateTime<Local>) -> anyhow::Result<usize> {
        let mut alerted = 0;
        for item in self.inventory.low_stock_items().await? {
            let id = format!("inventory_{}", item.id);
            if self.store.get_by_id(&id).await?.is_some() {
                continue;
            }
            let record = Notification::new(
                id,
                "Stock critique",
                format!(
                    "Stock faible pour {}: {}/{} {}",
                    item.nom, item.stock_actuel, item.stock_minimum, item.unite
                ),
                Category::LowInventory,
                now.timestamp_millis(),
            )
            .related_to("matiere_premiere", item.id)
            .with_priority("high");
            self.store.upsert(record).await?;
            self.presenter
                .present(AlertRequest::low_inventory(
                    &item.nom,
                    item.stock_actuel,
                    item.stock_minimum,
                    &item.unite,
                ))
                .await;
            alerted += 1;
        }
        Ok(alerted)
    }

    async fn check_deliveries(&self, now: DateTime<Local>) -> anyhow::Result<usize> {
        let mut alerted = 0;
        let deliveries = self.orders.deliveries_on(now.date_naive()).await?;
        for order in deliveries.into_iter().filter(|o| !o.delivery_notified) {
            let id = format!("delivery_{}", order.id);
            if self.store.get_by_id(&id).await?.is_some() {
                continue;
            }
            let number = order
                .numero
                .clone()
                .unwrap_or_else(|| format!("CMD-{}", order.id));
            let time = order
                .date_livraison_prevue
                .clone()
                .unwrap_or_else(|| order.date_livraison_souhaitee.clone());
            let record = Notification::new(
                id,
                "Livraison programmée",
                format!("Livraison de la commande {number} prévue aujourd'hui"),
                Category::Delivery,
                now.timestamp_millis(),
            )
            .related_to("commande", order.id)
            .with_priority("medium");
            self.store.upsert(record).await?;
            self.presenter
                .present(AlertRequest::delivery(&number, &time))
                .await;
            alerted += 1;
        }
        Ok(alerted)
    }
}

fn record_step(report: &mut PollReport, step: &'static str, result: anyhow::Result<usize>) {
    match result {
        Ok(alerted) => report.alerted += alerted,
        Err(e) => {
            tracing::error!("Notification check step {step} failed: {e}");
            report.failed_steps.push(step);
        }
    }
}

#[async_trait]
impl PollService for PollServiceImpl {
    async fn poll(&self) -> anyhow::Result<PollReport> {
        let now = self.clock.now();
        let mut report = PollReport::default();

        let result = self.sync_remote(&mut report).await;
        record_step(&mut report, "remote_notifications", result);
        let result = self.check_new_orders(now).await;
        record_step(&mut report, "new_orders", result);
        let result = self.check_production(now).await;
        record_step(&mut report, "production_updates", result);
        let result = self.check_low_inventory(now).await;
        record_step(&mut report, "low_inventory", result);
        let result = self.check_deliveries(now).await;
        record_step(&mut report, "deliveries", result);

        tracing::info!(
            "Notification check done: {} synced, {} alerted, {} failed steps",
            report.synced,
            report.alerted,
            report.failed_steps.len()
        );
        Ok(report)
    }
}
