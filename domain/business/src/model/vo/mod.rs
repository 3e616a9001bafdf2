mod auth;
mod error;
mod page;
mod query;

#[rustfmt::skip]
pub use {
    auth::{Credentials, RefreshRequest, RefreshResponse, TokenPair},
    error::ApiError,
    page::{Page, MAX_PAGES},
    query::ListQuery,
};
