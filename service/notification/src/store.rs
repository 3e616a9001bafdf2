use std::{future::Future, sync::Arc};

use async_trait::async_trait;
use domain_notification::{
    model::entity::Notification, repository::NotificationRepo, service::NotificationStoreService,
};
use futures::{stream::BoxStream, StreamExt};
use tokio::sync::watch;
use typed_builder::TypedBuilder;

/// Wraps the repository and bumps a version counter after every write.
/// Observers hold a receiver and re-query whenever the version moves.
#[derive(TypedBuilder)]
pub struct NotificationStoreServiceImpl {
    repo: Arc<dyn NotificationRepo>,
    #[builder(default = watch::channel(0).0)]
    changes: watch::Sender<u64>,
}

impl NotificationStoreServiceImpl {
    fn changed(&self) {
        self.changes.send_modify(|version| *version = version.wrapping_add(1));
    }

    fn observe<T, F, Fut>(&self, query: F) -> BoxStream<'static, anyhow::Result<T>>
    where
        T: Send + 'static,
        F: Fn(Arc<dyn NotificationRepo>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        let repo = self.repo.clone();
        let query = Arc::new(query);
        let receiver = self.changes.subscribe();
        futures::stream::unfold((receiver, true), move |(mut receiver, first)| {
            let repo = repo.clone();
            let query = query.clone();
            async move {
                if !first && receiver.changed().await.is_err() {
                    return None;
                }
                Some((query(repo).await, (receiver, false)))
            }
        })
        .boxed()
    }
}

#[async_trait]
impl NotificationStoreService for NotificationStoreServiceImpl {
    async fn upsert(&self, notification: Notification) -> anyhow::Result<()> {
        self.repo.upsert(&notification).await?;
        self.changed();
        Ok(())
    }

    async fn upsert_many(&self, notifications: Vec<Notification>) -> anyhow::Result<()> {
        self.repo.upsert_many(&notifications).await?;
        self.changed();
        Ok(())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Notification>> {
        self.repo.get_all().await
    }

    async fn get_unread(&self) -> anyhow::Result<Vec<Notification>> {
        self.repo.get_unread().await
    }

    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Notification>> {
        self.repo.get_by_id(id).await
    }

    async fn mark_as_read(&self, id: &str) -> anyhow::Result<()> {
        self.repo.mark_as_read(id).await?;
        self.changed();
        Ok(())
    }

    async fn mark_all_as_read(&self) -> anyhow::Result<()> {
        self.repo.mark_all_as_read().await?;
        self.changed();
        Ok(())
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.repo.delete_by_id(id).await?;
        self.changed();
        Ok(())
    }

    async fn delete_all(&self) -> anyhow::Result<()> {
        self.repo.delete_all().await?;
        self.changed();
        Ok(())
    }

    async fn delete_older_than(&self, cutoff: i64) -> anyhow::Result<u64> {
        let deleted = self.repo.delete_older_than(cutoff).await?;
        if deleted > 0 {
            self.changed();
        }
        Ok(deleted)
    }

    async fn count_unread(&self) -> anyhow::Result<u64> {
        self.repo.count_unread().await
    }

    fn observe_all(&self) -> BoxStream<'static, anyhow::Result<Vec<Notification>>> {
        self.observe(|repo| async move { repo.get_all().await })
    }

    fn observe_unread(&self) -> BoxStream<'static, anyhow::Result<Vec<Notification>>> {
        self.observe(|repo| async move { repo.get_unread().await })
    }

    fn observe_unread_count(&self) -> BoxStream<'static, anyhow::Result<u64>> {
        self.observe(|repo| async move { repo.count_unread().await })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use domain_notification::mock::MockNotificationRepo;

    use super::*;

    #[tokio::test]
    async fn observer_requeries_after_each_write() {
        let unread = Arc::new(AtomicU64::new(2));
        let mut repo = MockNotificationRepo::new();
        let counter = unread.clone();
        repo.expect_count_unread()
            .returning(move || Ok(counter.load(Ordering::SeqCst)));
        let counter = unread.clone();
        repo.expect_mark_as_read().times(1).returning(move |_| {
            counter.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        });
        let store = NotificationStoreServiceImpl::builder()
            .repo(Arc::new(repo))
            .build();

        let mut counts = store.observe_unread_count();
        assert_eq!(2, counts.next().await.unwrap().unwrap());
        store.mark_as_read("n1").await.unwrap();
        assert_eq!(1, counts.next().await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn empty_sweep_does_not_wake_observers() {
        let mut repo = MockNotificationRepo::new();
        repo.expect_delete_older_than().returning(|_| Ok(0));
        repo.expect_get_all().returning(|| Ok(vec![]));
        let store = NotificationStoreServiceImpl::builder()
            .repo(Arc::new(repo))
            .build();

        let mut all = store.observe_all();
        assert!(all.next().await.unwrap().unwrap().is_empty());
        assert_eq!(0, store.delete_older_than(0).await.unwrap());
        let next = tokio::time::timeout(std::time::Duration::from_millis(50), all.next()).await;
        assert!(next.is_err());
    }

    #[tokio::test]
    async fn stream_ends_when_store_is_dropped() {
        let mut repo = MockNotificationRepo::new();
        repo.expect_get_unread().returning(|| Ok(vec![]));
        let store = NotificationStoreServiceImpl::builder()
            .repo(Arc::new(repo))
            .build();

        let mut unread = store.observe_unread();
        assert!(unread.next().await.unwrap().unwrap().is_empty());
        drop(store);
        assert!(unread.next().await.is_none());
    }
}
