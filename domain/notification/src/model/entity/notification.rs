use serde::{Deserialize, Serialize};

use crate::model::vo::Category;

/// A notification kept in the local store.
///
/// Created either by syncing the backend or by the poller when it spots a
/// business event. After creation only `is_read` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: Category,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub is_read: bool,
    /// Advisory link to a business object, e.g. `("12", "commande")`.
    pub related_object_id: Option<String>,
    pub related_object_type: Option<String>,
    pub priority: String,
}

impl Notification {
    pub const DEFAULT_PRIORITY: &'static str = "medium";

    /// An unread notification with the default priority and no related object.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        category: Category,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            category,
            timestamp,
            is_read: false,
            related_object_id: None,
            related_object_type: None,
            priority: Self::DEFAULT_PRIORITY.to_string(),
        }
    }

    pub fn related_to(mut self, object_type: impl Into<String>, object_id: impl ToString) -> Self {
        self.related_object_type = Some(object_type.into());
        self.related_object_id = Some(object_id.to_string());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }
}
