use async_trait::async_trait;

use crate::{
    exception::ApiResult,
    model::{entity::User, vo::Credentials},
};

#[async_trait]
pub trait AuthRepo: Send + Sync {
    /// Obtain and store a token pair.
    async fn login(&self, credentials: &Credentials) -> ApiResult<User>;
    async fn current_user(&self) -> ApiResult<User>;
    /// Forget the stored tokens.
    async fn logout(&self) -> anyhow::Result<()>;
    async fn is_logged_in(&self) -> bool;
}
