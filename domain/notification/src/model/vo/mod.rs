mod alert;
mod category;
mod channel;
mod poll;
mod remote;
mod urgency;

#[rustfmt::skip]
pub use {
    alert::{string_hash, Alert, AlertKind, AlertRequest, DeepLink},
    category::Category,
    channel::Channel,
    poll::PollReport,
    remote::{NotificationQuery, NotificationSummary, RemoteId, RemoteNotification},
    urgency::Urgency,
};
