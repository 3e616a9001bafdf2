mod notification;

#[rustfmt::skip]
pub use {
    notification::Notification,
};
