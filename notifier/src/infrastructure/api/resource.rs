use async_trait::async_trait;
use domain_business::{
    exception::{ApiException, ApiResult},
    model::vo::{ListQuery, Page},
    repository::{RemoteRepository, Resource},
};
use reqwest::Method;

use super::ApiClient;

#[async_trait]
impl<T: Resource> RemoteRepository<T> for ApiClient {
    async fn list(&self, query: &ListQuery) -> ApiResult<Page<T>> {
        self.get_json(T::PATH, &query.to_pairs()).await
    }

    async fn get(&self, id: i64) -> ApiResult<T> {
        self.get_json(&item_path::<T>(id), &[]).await
    }

    async fn create(&self, item: &T) -> ApiResult<T> {
        writable::<T>()?;
        self.send_json(Method::POST, T::PATH, item).await
    }

    async fn update(&self, id: i64, item: &T) -> ApiResult<T> {
        writable::<T>()?;
        self.send_json(Method::PUT, &item_path::<T>(id), item).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        writable::<T>()?;
        self.send_empty(Method::DELETE, &item_path::<T>(id)).await
    }
}

fn item_path<T: Resource>(id: i64) -> String {
    format!("{}{id}/", T::PATH)
}

fn writable<T: Resource>() -> ApiResult<()> {
    if T::READ_ONLY {
        return Err(ApiException::from(anyhow::anyhow!(
            "{} only supports reads",
            T::PATH
        )));
    }
    Ok(())
}
