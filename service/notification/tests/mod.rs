use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use domain_business::{
    exception::{ApiException, ServiceException},
    mock::{MockInventoryService, MockOrderService, MockProductionService},
    model::{
        entity::{Commande, MatierePremiere, OrdreProduction},
        vo::{Page, MAX_PAGES},
    },
};
use domain_notification::{
    mock::{MockAlertPresenter, MockClock, MockNotificationSource},
    model::{
        entity::Notification,
        vo::{AlertKind, AlertRequest, Category, NotificationSummary, RemoteId, RemoteNotification},
    },
    repository::NotificationRepo,
    service::{NotificationService, NotificationStoreService, PollService},
};
use futures::StreamExt;
use service_notification::{
    NotificationServiceImpl, NotificationStoreServiceImpl, PollServiceImpl, ReconcileServiceImpl,
};

#[derive(Default)]
struct MemoryRepo {
    rows: Mutex<HashMap<String, Notification>>,
}

impl MemoryRepo {
    fn sorted(&self, filter: impl Fn(&Notification) -> bool) -> Vec<Notification> {
        let mut rows = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|n| filter(n))
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        rows
    }
}

#[async_trait]
impl NotificationRepo for MemoryRepo {
    async fn upsert(&self, notification: &Notification) -> anyhow::Result<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(notification.id.clone(), notification.clone());
        Ok(())
    }

    async fn upsert_many(&self, notifications: &[Notification]) -> anyhow::Result<()> {
        for notification in notifications {
            self.upsert(notification).await?;
        }
        Ok(())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Notification>> {
        Ok(self.sorted(|_| true))
    }

    async fn get_unread(&self) -> anyhow::Result<Vec<Notification>> {
        Ok(self.sorted(|n| !n.is_read))
    }

    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Notification>> {
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn mark_as_read(&self, id: &str) -> anyhow::Result<()> {
        if let Some(n) = self.rows.lock().unwrap().get_mut(id) {
            n.is_read = true;
        }
        Ok(())
    }

    async fn mark_all_as_read(&self) -> anyhow::Result<()> {
        for n in self.rows.lock().unwrap().values_mut() {
            n.is_read = true;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> anyhow::Result<()> {
        self.rows.lock().unwrap().remove(id);
        Ok(())
    }

    async fn delete_all(&self) -> anyhow::Result<()> {
        self.rows.lock().unwrap().clear();
        Ok(())
    }

    async fn delete_older_than(&self, cutoff: i64) -> anyhow::Result<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|_, n| n.timestamp >= cutoff);
        Ok((before - rows.len()) as u64)
    }

    async fn count_unread(&self) -> anyhow::Result<u64> {
        Ok(self.sorted(|n| !n.is_read).len() as u64)
    }
}

fn remote(id: &str, is_read: bool) -> RemoteNotification {
    RemoteNotification {
        id: RemoteId::from(id),
        title: format!("Notification {id}"),
        message: "Nouvelle commande reçue".to_string(),
        kind: "commande".to_string(),
        timestamp: 1_714_600_000_000,
        is_read,
        related_object_id: None,
        related_object_type: None,
        priority: Some("high".to_string()),
    }
}

fn page<T>(results: Vec<T>) -> Page<T> {
    Page {
        count: results.len() as u64,
        next: None,
        previous: None,
        results,
    }
}

fn order(id: i64, date_livraison_prevue: Option<&str>, delivery_notified: bool) -> Commande {
    Commande {
        id,
        client_id: 1,
        chantier_id: None,
        date_commande: "2024-05-02".to_string(),
        date_livraison_souhaitee: "2024-05-02".to_string(),
        statut: "en_attente".to_string(),
        client_nom: Some("Maçonnerie Dupré".to_string()),
        numero: Some(format!("CMD-{id}")),
        date_livraison_prevue: date_livraison_prevue.map(str::to_string),
        delivery_notified,
        lignes: None,
    }
}

fn production(id: i64, statut: &str) -> OrdreProduction {
    OrdreProduction {
        id,
        numero_bon: None,
        commande_id: 1,
        formule_id: 1,
        quantite_produire: 6.0,
        date_production: "2024-05-02".to_string(),
        heure_production: None,
        statut: statut.to_string(),
        matieres_sorties_calculees: false,
    }
}

fn material(id: i64) -> MatierePremiere {
    MatierePremiere {
        id,
        nom: "Ciment".to_string(),
        unite: "t".to_string(),
        stock_actuel: 2.0,
        stock_minimum: 5.0,
        statut_stock: "critique".to_string(),
        prix_unitaire: 90.0,
    }
}

fn clock() -> MockClock {
    let mut clock = MockClock::new();
    clock
        .expect_now()
        .returning(|| Local.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap());
    clock
}

fn capture_presenter() -> (MockAlertPresenter, Arc<Mutex<Vec<AlertRequest>>>) {
    let captured = Arc::new(Mutex::new(vec![]));
    let sink = captured.clone();
    let mut presenter = MockAlertPresenter::new();
    presenter.expect_present().returning(move |request| {
        sink.lock().unwrap().push(request);
    });
    (presenter, captured)
}

fn store(repo: Arc<MemoryRepo>) -> Arc<NotificationStoreServiceImpl> {
    Arc::new(NotificationStoreServiceImpl::builder().repo(repo).build())
}

struct PollFixture {
    source: MockNotificationSource,
    orders: MockOrderService,
    production: MockProductionService,
    inventory: MockInventoryService,
}

impl PollFixture {
    /// Every collaborator answers with nothing.
    fn quiet() -> Self {
        let mut source = MockNotificationSource::new();
        source.expect_list().returning(|_| Ok(page(vec![])));
        let mut orders = MockOrderService::new();
        orders.expect_recent_orders().returning(|_| Ok(vec![]));
        orders.expect_deliveries_on().returning(|_| Ok(vec![]));
        let mut production = MockProductionService::new();
        production.expect_recent_updates().returning(|_| Ok(vec![]));
        let mut inventory = MockInventoryService::new();
        inventory.expect_low_stock_items().returning(|| Ok(vec![]));
        Self {
            source,
            orders,
            production,
            inventory,
        }
    }

    fn build(
        self,
        store: Arc<NotificationStoreServiceImpl>,
        presenter: MockAlertPresenter,
    ) -> PollServiceImpl {
        PollServiceImpl::builder()
            .source(Arc::new(self.source))
            .reconciler(Arc::new(
                ReconcileServiceImpl::builder().store(store.clone()).build(),
            ))
            .store(store)
            .orders(Arc::new(self.orders))
            .production(Arc::new(self.production))
            .inventory(Arc::new(self.inventory))
            .presenter(Arc::new(presenter))
            .clock(Arc::new(clock()))
            .build()
    }
}

#[tokio::test]
async fn reconciled_unread_count_matches_remote() {
    let repo = Arc::new(MemoryRepo::default());
    let store = store(repo);
    let mut source = MockNotificationSource::new();
    source
        .expect_list()
        .returning(|_| Ok(page(vec![remote("n1", false), remote("n2", true)])));
    let service = NotificationServiceImpl::builder()
        .source(Arc::new(source))
        .reconciler(Arc::new(
            ReconcileServiceImpl::builder().store(store.clone()).build(),
        ))
        .store(store.clone())
        .clock(Arc::new(clock()))
        .build();

    let fetched = service.fetch_remote(&Default::default()).await.unwrap();
    assert_eq!(2, fetched.len());
    assert_eq!(1, store.count_unread().await.unwrap());
    let unread = store.get_unread().await.unwrap();
    assert_eq!("n1", unread[0].id);
    assert_eq!(Category::NewOrder, unread[0].category);
}

#[tokio::test]
async fn poll_alerts_each_event_once() {
    let repo = Arc::new(MemoryRepo::default());
    let store = store(repo.clone());
    let mut fixture = PollFixture::quiet();
    fixture.source = MockNotificationSource::new();
    fixture
        .source
        .expect_list()
        .returning(|_| Ok(page(vec![remote("r1", false)])));
    fixture.orders = MockOrderService::new();
    fixture
        .orders
        .expect_recent_orders()
        .returning(|_| Ok(vec![order(1, None, false)]));
    fixture.orders.expect_deliveries_on().returning(|_| {
        Ok(vec![
            order(2, Some("2024-05-02T14:00:00"), false),
            order(3, Some("2024-05-02T16:00:00"), true),
        ])
    });
    fixture.production = MockProductionService::new();
    fixture
        .production
        .expect_recent_updates()
        .returning(|_| Ok(vec![production(4, "pret"), production(5, "en_cours")]));
    fixture.inventory = MockInventoryService::new();
    fixture
        .inventory
        .expect_low_stock_items()
        .returning(|| Ok(vec![material(6)]));
    let (presenter, captured) = capture_presenter();
    let poll = fixture.build(store.clone(), presenter);

    let report = poll.poll().await.unwrap();
    assert!(report.is_clean());
    assert_eq!(1, report.synced);
    assert_eq!(5, report.alerted);
    let kinds = captured
        .lock()
        .unwrap()
        .iter()
        .map(|r| r.kind.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        vec![
            AlertKind::Remote {
                notification_id: "r1".to_string(),
                category: Category::NewOrder
            },
            AlertKind::NewOrder,
            AlertKind::ProductionUpdate,
            AlertKind::LowInventory,
            AlertKind::Delivery,
        ],
        kinds
    );

    let ids = store
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.id)
        .collect::<Vec<_>>();
    for id in ["r1", "order_1", "production_4", "inventory_6", "delivery_2"] {
        assert!(ids.contains(&id.to_string()), "missing {id}");
    }
    let low = repo.get_by_id("inventory_6").await.unwrap().unwrap();
    assert_eq!("high", low.priority);
    assert_eq!(Some("matiere_premiere".to_string()), low.related_object_type);
    assert_eq!("Stock faible pour Ciment: 2/5 t", low.message);

    // Same backend state again: nothing new to say.
    let report = poll.poll().await.unwrap();
    assert_eq!(0, report.alerted);
    assert_eq!(5, captured.lock().unwrap().len());
}

#[tokio::test]
async fn failing_step_does_not_stop_the_others() {
    let repo = Arc::new(MemoryRepo::default());
    let store = store(repo);
    let mut fixture = PollFixture::quiet();
    fixture.source = MockNotificationSource::new();
    fixture
        .source
        .expect_list()
        .returning(|_| Err(ApiException::Transport("timeout".to_string())));
    fixture.orders = MockOrderService::new();
    fixture.orders.expect_recent_orders().returning(|_| {
        Err(ServiceException::Message {
            message: "Erreur lors du chargement des commandes".to_string(),
            source: ApiException::EmptyBody,
        })
    });
    fixture
        .orders
        .expect_deliveries_on()
        .returning(|_| Ok(vec![order(8, Some("2024-05-02"), false)]));
    let (presenter, captured) = capture_presenter();
    let poll = fixture.build(store.clone(), presenter);

    let report = poll.poll().await.unwrap();
    assert_eq!(vec!["remote_notifications", "new_orders"], report.failed_steps);
    assert_eq!(1, report.alerted);
    assert_eq!(AlertKind::Delivery, captured.lock().unwrap()[0].kind);
    assert!(store.get_by_id("delivery_8").await.unwrap().is_some());
}

#[tokio::test]
async fn remote_notification_already_stored_is_not_alerted() {
    let repo = Arc::new(MemoryRepo::default());
    repo.upsert(&remote("r9", false).to_local()).await.unwrap();
    let store = store(repo);
    let mut fixture = PollFixture::quiet();
    fixture.source = MockNotificationSource::new();
    fixture
        .source
        .expect_list()
        .returning(|_| Ok(page(vec![remote("r9", false), remote("r10", false)])));
    let (presenter, captured) = capture_presenter();
    let poll = fixture.build(store, presenter);

    let report = poll.poll().await.unwrap();
    assert_eq!(2, report.synced);
    assert_eq!(1, report.alerted);
    assert_eq!(
        AlertKind::Remote {
            notification_id: "r10".to_string(),
            category: Category::NewOrder
        },
        captured.lock().unwrap()[0].kind
    );
}

#[tokio::test]
async fn remote_listing_walk_is_bounded() {
    let repo = Arc::new(MemoryRepo::default());
    let store = store(repo);
    let mut fixture = PollFixture::quiet();
    fixture.source = MockNotificationSource::new();
    fixture
        .source
        .expect_list()
        .times(MAX_PAGES as usize)
        .returning(|query| {
            let number = query.page.unwrap_or(1);
            Ok(Page {
                next: Some(format!("http://host/api/notifications/?page={}", number + 1)),
                ..page(vec![remote(&format!("r{number}"), false)])
            })
        });
    let (presenter, _) = capture_presenter();
    let poll = fixture.build(store, presenter);

    let report = poll.poll().await.unwrap();
    assert_eq!(MAX_PAGES as usize, report.synced);
}

#[tokio::test]
async fn empty_remote_page_ends_the_walk() {
    let repo = Arc::new(MemoryRepo::default());
    let store = store(repo);
    let mut fixture = PollFixture::quiet();
    fixture.source = MockNotificationSource::new();
    fixture.source.expect_list().times(1).returning(|_| {
        Ok(Page {
            next: Some("http://host/api/notifications/?page=2".to_string()),
            ..page(vec![])
        })
    });
    let (presenter, _) = capture_presenter();
    let poll = fixture.build(store, presenter);

    let report = poll.poll().await.unwrap();
    assert_eq!(0, report.synced);
    assert!(report.failed_steps.is_empty());
}

fn notification_service(
    source: MockNotificationSource,
    store: Arc<NotificationStoreServiceImpl>,
) -> NotificationServiceImpl {
    NotificationServiceImpl::builder()
        .source(Arc::new(source))
        .reconciler(Arc::new(
            ReconcileServiceImpl::builder().store(store.clone()).build(),
        ))
        .store(store)
        .clock(Arc::new(clock()))
        .build()
}

#[tokio::test]
async fn unread_count_falls_back_to_local() {
    let repo = Arc::new(MemoryRepo::default());
    repo.upsert(&remote("a", false).to_local()).await.unwrap();
    repo.upsert(&remote("b", false).to_local()).await.unwrap();

    let mut online = MockNotificationSource::new();
    online.expect_summary().returning(|| {
        Ok(NotificationSummary {
            total_count: 10,
            unread_count: 7,
            ..Default::default()
        })
    });
    let service = notification_service(online, store(repo.clone()));
    assert_eq!(7, service.unread_count_hybrid().await.unwrap());

    let mut offline = MockNotificationSource::new();
    offline
        .expect_summary()
        .returning(|| Err(ApiException::Transport("unreachable".to_string())));
    let service = notification_service(offline, store(repo));
    assert_eq!(2, service.unread_count_hybrid().await.unwrap());
}

#[tokio::test]
async fn hybrid_stream_survives_remote_failure() {
    let repo = Arc::new(MemoryRepo::default());
    repo.upsert(&remote("kept", false).to_local()).await.unwrap();
    let mut source = MockNotificationSource::new();
    source
        .expect_list()
        .returning(|_| Err(ApiException::Unauthorized));
    let store = store(repo);
    let service = notification_service(source, store.clone());

    let mut stream = service.observe_hybrid().await;
    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(vec!["kept".to_string()], first.iter().map(|n| n.id.clone()).collect::<Vec<_>>());

    service.delete("kept").await.unwrap();
    assert!(stream.next().await.unwrap().unwrap().is_empty());
}

#[tokio::test]
async fn remote_mark_as_read_mirrors_locally_only_on_success() {
    let repo = Arc::new(MemoryRepo::default());
    repo.upsert(&remote("ok", false).to_local()).await.unwrap();
    repo.upsert(&remote("ko", false).to_local()).await.unwrap();
    let mut source = MockNotificationSource::new();
    source.expect_mark_as_read().returning(|id| {
        if id == "ok" {
            Ok(())
        } else {
            Err(ApiException::Status {
                code: 404,
                message: "Not found".to_string(),
            })
        }
    });
    let service = notification_service(source, store(repo.clone()));

    service.mark_as_read_remote("ok").await.unwrap();
    assert!(service.mark_as_read_remote("ko").await.is_err());
    assert!(repo.get_by_id("ok").await.unwrap().unwrap().is_read);
    assert!(!repo.get_by_id("ko").await.unwrap().unwrap().is_read);
}

#[tokio::test]
async fn clean_old_keeps_recent_notifications() {
    let repo = Arc::new(MemoryRepo::default());
    let now = Local.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap().timestamp_millis();
    let day = 24 * 60 * 60 * 1000;
    let mut old = remote("old", true).to_local();
    old.timestamp = now - 31 * day;
    let mut fresh = remote("fresh", true).to_local();
    fresh.timestamp = now - 29 * day;
    repo.upsert(&old).await.unwrap();
    repo.upsert(&fresh).await.unwrap();
    let service = notification_service(MockNotificationSource::new(), store(repo.clone()));

    assert_eq!(1, service.clean_old(30).await.unwrap());
    assert!(repo.get_by_id("old").await.unwrap().is_none());
    assert!(repo.get_by_id("fresh").await.unwrap().is_some());
}
