mod alert;
mod clock;
mod notification;
mod poll;
mod reconcile;
mod store;

#[rustfmt::skip]
pub use {
    alert::AlertPresenterImpl,
    clock::SystemClock,
    notification::NotificationServiceImpl,
    poll::PollServiceImpl,
    reconcile::ReconcileServiceImpl,
    store::NotificationStoreServiceImpl,
};
