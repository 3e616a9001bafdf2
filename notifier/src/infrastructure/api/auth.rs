use async_trait::async_trait;
use domain_business::{
    exception::ApiResult,
    model::{
        entity::User,
        vo::{Credentials, TokenPair},
    },
    repository::AuthRepo,
};
use reqwest::Method;

use super::{client::TOKEN_PATH, ApiClient};

const USER_PATH: &str = "auth/user/";

#[async_trait]
impl AuthRepo for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        let tokens: TokenPair = self.send_json(Method::POST, TOKEN_PATH, credentials).await?;
        self.tokens().save(tokens).await?;
        self.current_user().await
    }

    async fn current_user(&self) -> ApiResult<User> {
        self.get_json(USER_PATH, &[]).await
    }

    async fn logout(&self) -> anyhow::Result<()> {
        self.tokens().clear().await
    }

    async fn is_logged_in(&self) -> bool {
        self.tokens().is_logged_in().await
    }
}
