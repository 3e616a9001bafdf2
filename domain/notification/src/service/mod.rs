mod alert;
mod clock;
mod notification;
mod poll;
mod reconcile;
mod store;

#[rustfmt::skip]
pub use {
    alert::{AlertPresenter, AlertSink},
    clock::Clock,
    notification::NotificationService,
    poll::PollService,
    reconcile::ReconcileService,
    store::NotificationStoreService,
};
