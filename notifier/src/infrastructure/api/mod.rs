mod auth;
mod client;
mod dashboard;
mod notification;
mod resource;
mod token;

#[rustfmt::skip]
pub use {
    client::ApiClient,
    token::TokenManager,
};

/// Client rooted at `{server}/api/`, logged in with `access`/`r1` when
/// `access` is set.
#[cfg(test)]
async fn client_for(server: &mockito::ServerGuard, access: Option<&str>) -> ApiClient {
    use std::{sync::Arc, time::Duration};

    use domain_business::model::vo::TokenPair;

    let tokens = Arc::new(TokenManager::in_memory());
    if let Some(access) = access {
        tokens
            .save(TokenPair {
                access: access.to_string(),
                refresh: "r1".to_string(),
            })
            .await
            .unwrap();
    }
    ApiClient::new(&format!("{}/api/", server.url()), Duration::from_secs(5), tokens).unwrap()
}
