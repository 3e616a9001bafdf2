use async_trait::async_trait;
use domain_notification::{model::entity::Notification, repository::NotificationRepo};
use sea_orm::{
    prelude::*,
    sea_query::{Expr, OnConflict},
    DatabaseConnection, Insert, QueryOrder, TransactionTrait,
};

use super::model::{ActiveModel, Column, Entity};

/// [`NotificationRepo`] over a sea-orm connection (SQLite in practice).
#[derive(Clone)]
pub struct SqliteNotificationRepo {
    db: DatabaseConnection,
}

impl SqliteNotificationRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn upsert_statement(notification: &Notification) -> Insert<ActiveModel> {
        Entity::insert(ActiveModel::from(notification)).on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::Title,
                    Column::Message,
                    Column::Category,
                    Column::Timestamp,
                    Column::IsRead,
                    Column::RelatedObjectId,
                    Column::RelatedObjectType,
                    Column::Priority,
                ])
                .to_owned(),
        )
    }
}

#[async_trait]
impl NotificationRepo for SqliteNotificationRepo {
    async fn upsert(&self, notification: &Notification) -> anyhow::Result<()> {
        Self::upsert_statement(notification)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn upsert_many(&self, notifications: &[Notification]) -> anyhow::Result<()> {
        let txn = self.db.begin().await?;
        for notification in notifications {
            Self::upsert_statement(notification)
                .exec_without_returning(&txn)
                .await?;
        }
        txn.commit().await?;
        Ok(())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Notification>> {
        Ok(Entity::find()
            .order_by_desc(Column::Timestamp)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Notification::from)
            .collect())
    }

    async fn get_unread(&self) -> anyhow::Result<Vec<Notification>> {
        Ok(Entity::find()
            .filter(Column::IsRead.eq(false))
            .order_by_desc(Column::Timestamp)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Notification::from)
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Notification>> {
        Ok(Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?
            .map(Notification::from))
    }

    async fn mark_as_read(&self, id: &str) -> anyhow::Result<()> {
        Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn mark_all_as_read(&self) -> anyhow::Result<()> {
        Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> anyhow::Result<()> {
        Entity::delete_by_id(id.to_owned()).exec(&self.db).await?;
        Ok(())
    }

    async fn delete_all(&self) -> anyhow::Result<()> {
        Entity::delete_many().exec(&self.db).await?;
        Ok(())
    }

    async fn delete_older_than(&self, cutoff: i64) -> anyhow::Result<u64> {
        let result = Entity::delete_many()
            .filter(Column::Timestamp.lt(cutoff))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    async fn count_unread(&self) -> anyhow::Result<u64> {
        Ok(Entity::find()
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use domain_notification::{
        model::vo::{Category, RemoteId, RemoteNotification},
        service::{NotificationStoreService, ReconcileService},
    };
    use service_notification::{NotificationStoreServiceImpl, ReconcileServiceImpl};

    use super::*;
    use crate::infrastructure::database::connect;

    async fn repo() -> SqliteNotificationRepo {
        SqliteNotificationRepo::new(connect("sqlite::memory:").await.unwrap())
    }

    fn notification(id: &str, timestamp: i64) -> Notification {
        Notification::new(id, "Titre", "Message", Category::General, timestamp)
    }

    fn remote(id: i64, is_read: bool) -> RemoteNotification {
        RemoteNotification {
            id: RemoteId(id.to_string()),
            title: format!("Notification {id}"),
            message: "Livraison prévue à 14h".to_string(),
            kind: "delivery".to_string(),
            timestamp: 1_700_000_000_000 + id,
            is_read,
            related_object_id: Some(id * 10),
            related_object_type: Some("commande".to_string()),
            priority: None,
        }
    }

    #[tokio::test]
    async fn upsert_replaces_by_id_and_orders_newest_first() {
        let repo = repo().await;
        repo.upsert(&notification("a", 1)).await.unwrap();
        repo.upsert_many(&[notification("b", 3), notification("c", 2)])
            .await
            .unwrap();
        let mut changed = notification("a", 4);
        changed.title = "Nouveau titre".to_string();
        repo.upsert(&changed).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(
            vec!["a", "b", "c"],
            all.iter().map(|n| n.id.as_str()).collect::<Vec<_>>()
        );
        assert_eq!("Nouveau titre", all[0].title);
        assert_eq!(Some(changed), repo.get_by_id("a").await.unwrap());
        assert_eq!(None, repo.get_by_id("missing").await.unwrap());
    }

    #[tokio::test]
    async fn read_state_and_deletes() {
        let repo = repo().await;
        repo.upsert_many(&[notification("a", 10), notification("b", 20), notification("c", 30)])
            .await
            .unwrap();

        repo.mark_as_read("b").await.unwrap();
        assert_eq!(2, repo.count_unread().await.unwrap());
        assert_eq!(
            vec!["c", "a"],
            repo.get_unread()
                .await
                .unwrap()
                .iter()
                .map(|n| n.id.as_str())
                .collect::<Vec<_>>()
        );

        assert_eq!(1, repo.delete_older_than(20).await.unwrap());
        repo.delete_by_id("c").await.unwrap();
        let read_b = Notification {
            is_read: true,
            ..notification("b", 20)
        };
        assert_eq!(vec![read_b], repo.get_all().await.unwrap());

        repo.mark_all_as_read().await.unwrap();
        assert_eq!(0, repo.count_unread().await.unwrap());
        repo.delete_all().await.unwrap();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reconciled_remote_notifications_drive_unread_count() {
        let store = Arc::new(
            NotificationStoreServiceImpl::builder()
                .repo(Arc::new(repo().await))
                .build(),
        );
        let reconciler = ReconcileServiceImpl::builder().store(store.clone()).build();

        let stored = reconciler
            .reconcile(&[remote(1, false), remote(2, true)])
            .await
            .unwrap();
        assert_eq!(2, stored.len());
        assert_eq!(1, store.count_unread().await.unwrap());

        let first = store.get_by_id("1").await.unwrap().unwrap();
        assert_eq!(Category::Delivery, first.category);
        assert_eq!("medium", first.priority);
        assert_eq!(Some("10".to_string()), first.related_object_id);

        reconciler.reconcile(&[remote(1, true)]).await.unwrap();
        assert_eq!(0, store.count_unread().await.unwrap());
    }
}
