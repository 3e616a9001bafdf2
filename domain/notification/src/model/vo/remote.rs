use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};

use super::Category;
use crate::model::entity::Notification;

/// Notification id as sent by the backend: a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RemoteId(pub String);

impl<'de> Deserialize<'de> for RemoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => RemoteId(text),
            Raw::Number(number) => RemoteId(number.to_string()),
        })
    }
}

impl Display for RemoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RemoteId {
    fn from(value: &str) -> Self {
        RemoteId(value.to_string())
    }
}

/// Notification as served by `notifications/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteNotification {
    pub id: RemoteId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub related_object_id: Option<i64>,
    #[serde(default)]
    pub related_object_type: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

impl RemoteNotification {
    /// Local shape of this notification.
    pub fn to_local(&self) -> Notification {
        Notification {
            id: self.id.to_string(),
            title: self.title.clone(),
            message: self.message.clone(),
            category: Category::parse(&self.kind),
            timestamp: self.timestamp,
            is_read: self.is_read,
            related_object_id: self.related_object_id.map(|id| id.to_string()),
            related_object_type: self.related_object_type.clone(),
            priority: self
                .priority
                .clone()
                .unwrap_or_else(|| Notification::DEFAULT_PRIORITY.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSummary {
    pub total_count: u64,
    pub unread_count: u64,
    #[serde(default)]
    pub new_orders_count: u64,
    #[serde(default)]
    pub production_updates_count: u64,
    #[serde(default)]
    pub low_inventory_count: u64,
    #[serde(default)]
    pub delivery_count: u64,
}

/// Filters accepted by the remote notification list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQuery {
    pub page: Option<u32>,
    /// Backend `type` filter.
    pub kind: Option<String>,
    pub is_read: Option<bool>,
}

impl NotificationQuery {
    pub fn unread() -> Self {
        Self {
            is_read: Some(false),
            ..Default::default()
        }
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![];
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("type".to_string(), kind.clone()));
        }
        if let Some(is_read) = self.is_read {
            pairs.push(("is_read".to_string(), is_read.to_string()));
        }
        pairs
    }
}
