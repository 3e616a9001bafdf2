mod auth;
mod dashboard;
mod remote;

#[rustfmt::skip]
pub use {
    auth::AuthRepo,
    dashboard::DashboardRepo,
    remote::{RemoteRepository, Resource},
};
