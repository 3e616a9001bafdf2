use std::{sync::Arc, time::Duration};

use domain_business::repository::{AuthRepo, DashboardRepo};
use domain_notification::{
    repository::NotificationRepo,
    service::{
        AlertPresenter, AlertSink, Clock, NotificationService, NotificationStoreService,
        PollService, ReconcileService,
    },
};
use service_business::{InventoryServiceImpl, OrderServiceImpl, ProductionServiceImpl};
use service_notification::{
    AlertPresenterImpl, NotificationServiceImpl, NotificationStoreServiceImpl, PollServiceImpl,
    ReconcileServiceImpl, SystemClock,
};

use super::{
    api::{ApiClient, TokenManager},
    database::{self, SqliteNotificationRepo},
    service::{HostDeviceState, LogAlertSink, NotifySendSink},
};
use crate::{
    background_service::{Backoff, WorkScheduler},
    config::{AlertSinkKind, NotifierConfig},
};

const APP_NAME: &str = "beton-notifier";

/// Owns every long-lived service of the process.
pub struct ServiceProvider {
    pub config: NotifierConfig,
    api: Arc<ApiClient>,
    pub store: Arc<dyn NotificationStoreService>,
    pub notifications: Arc<dyn NotificationService>,
    pub poll: Arc<dyn PollService>,
    pub scheduler: Arc<WorkScheduler>,
}

impl ServiceProvider {
    pub async fn build(config: NotifierConfig) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&config.storage.data_dir).await?;
        let timeout = Duration::from_secs(config.api.timeout_secs);

        let tokens = Arc::new(TokenManager::load(config.storage.token_path()).await?);
        let api = Arc::new(ApiClient::new(&config.api.base_url, timeout, tokens)?);

        let db = database::connect(&config.storage.database_url()).await?;
        let repo: Arc<dyn NotificationRepo> = Arc::new(SqliteNotificationRepo::new(db));
        let store: Arc<dyn NotificationStoreService> =
            Arc::new(NotificationStoreServiceImpl::builder().repo(repo).build());
        let reconciler: Arc<dyn ReconcileService> =
            Arc::new(ReconcileServiceImpl::builder().store(store.clone()).build());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let notifications = Arc::new(
            NotificationServiceImpl::builder()
                .source(api.clone())
                .reconciler(reconciler.clone())
                .store(store.clone())
                .clock(clock.clone())
                .build(),
        );
        let presenter: Arc<dyn AlertPresenter> = Arc::new(
            AlertPresenterImpl::builder()
                .sinks(Self::sinks(config.alerts.sink))
                .build(),
        );
        let poll = Arc::new(
            PollServiceImpl::builder()
                .source(api.clone())
                .reconciler(reconciler)
                .store(store.clone())
                .orders(Arc::new(
                    OrderServiceImpl::builder().order_repo(api.clone()).build(),
                ))
                .production(Arc::new(
                    ProductionServiceImpl::builder()
                        .production_repo(api.clone())
                        .build(),
                ))
                .inventory(Arc::new(
                    InventoryServiceImpl::builder().stock_repo(api.clone()).build(),
                ))
                .presenter(presenter)
                .clock(clock)
                .build(),
        );

        let device = Arc::new(HostDeviceState::for_backend(api.base_url(), timeout)?);
        let scheduler = Arc::new(WorkScheduler::new(
            device,
            Duration::from_secs(config.poller.constraint_recheck_secs),
        ));

        Ok(Self {
            config,
            api,
            store,
            notifications,
            poll,
            scheduler,
        })
    }

    fn sinks(kind: AlertSinkKind) -> Vec<Arc<dyn AlertSink>> {
        let log: Arc<dyn AlertSink> = Arc::new(LogAlertSink);
        match kind {
            AlertSinkKind::Log => vec![log],
            AlertSinkKind::NotifySend => vec![log, Arc::new(NotifySendSink::new(APP_NAME))],
        }
    }

    pub fn auth(&self) -> Arc<dyn AuthRepo> {
        self.api.clone()
    }

    pub fn dashboard(&self) -> Arc<dyn DashboardRepo> {
        self.api.clone()
    }

    pub fn backoff(&self) -> Backoff {
        Backoff {
            initial: Duration::from_secs(self.config.poller.backoff_secs),
            max: Duration::from_secs(self.config.poller.max_backoff_secs),
        }
    }
}
