use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    exception::ApiResult,
    model::vo::{ListQuery, Page, MAX_PAGES},
};

/// A REST collection exposed by the backend under `PATH`.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path relative to the api root, with trailing slash.
    const PATH: &'static str;
    /// The backend only serves list and get for this collection.
    const READ_ONLY: bool = false;

    fn id(&self) -> i64;
}

#[async_trait]
pub trait RemoteRepository<T: Resource>: Send + Sync {
    async fn list(&self, query: &ListQuery) -> ApiResult<Page<T>>;
    async fn get(&self, id: i64) -> ApiResult<T>;
    async fn create(&self, item: &T) -> ApiResult<T>;
    async fn update(&self, id: i64, item: &T) -> ApiResult<T>;
    async fn delete(&self, id: i64) -> ApiResult<()>;

    /// Follow `next` until the last page and concatenate the results.
    /// At most [`MAX_PAGES`] pages are requested.
    async fn fetch_all(&self, query: &ListQuery) -> ApiResult<Vec<T>> {
        let mut query = query.clone();
        let first = query.page.unwrap_or(1);
        let mut items = vec![];
        for page_number in first..first.saturating_add(MAX_PAGES) {
            query.page = Some(page_number);
            let page = self.list(&query).await?;
            let more = page.should_continue();
            items.extend(page.results);
            if !more {
                break;
            }
        }
        Ok(items)
    }
}
