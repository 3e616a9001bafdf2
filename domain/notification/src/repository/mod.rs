mod local;
mod remote;

#[rustfmt::skip]
pub use {
    local::NotificationRepo,
    remote::NotificationSource,
};
