//! `notifications` table
use domain_notification::model::{entity::Notification, vo::Category};
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub category: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub is_read: bool,
    pub related_object_id: Option<String>,
    pub related_object_type: Option<String>,
    pub priority: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Notification {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            message: model.message,
            category: Category::parse(&model.category),
            timestamp: model.timestamp,
            is_read: model.is_read,
            related_object_id: model.related_object_id,
            related_object_type: model.related_object_type,
            priority: model.priority,
        }
    }
}

impl From<&Notification> for ActiveModel {
    fn from(notification: &Notification) -> Self {
        Self {
            id: Set(notification.id.clone()),
            title: Set(notification.title.clone()),
            message: Set(notification.message.clone()),
            category: Set(notification.category.as_str().to_string()),
            timestamp: Set(notification.timestamp),
            is_read: Set(notification.is_read),
            related_object_id: Set(notification.related_object_id.clone()),
            related_object_type: Set(notification.related_object_type.clone()),
            priority: Set(notification.priority.clone()),
        }
    }
}
