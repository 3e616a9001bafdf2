use std::fmt::Display;

use super::{Category, Channel, RemoteNotification, Urgency};
use crate::model::entity::Notification;

/// The event an alert is raised for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertKind {
    NewOrder,
    ProductionUpdate,
    LowInventory,
    Delivery,
    General,
    /// A notification pushed by the backend.
    Remote {
        notification_id: String,
        category: Category,
    },
}

impl AlertKind {
    pub fn channel(&self) -> Channel {
        match self {
            AlertKind::NewOrder | AlertKind::Delivery => Channel::Orders,
            AlertKind::ProductionUpdate => Channel::Production,
            AlertKind::LowInventory => Channel::Inventory,
            AlertKind::General => Channel::General,
            AlertKind::Remote { category, .. } => Channel::for_category(*category),
        }
    }

    pub fn deep_link(&self) -> Option<DeepLink> {
        match self {
            AlertKind::NewOrder | AlertKind::Delivery => Some(DeepLink::Orders),
            AlertKind::ProductionUpdate => Some(DeepLink::Production),
            AlertKind::LowInventory => Some(DeepLink::Inventory),
            AlertKind::General => None,
            AlertKind::Remote {
                notification_id, ..
            } => Some(DeepLink::Notification(notification_id.clone())),
        }
    }

    /// Platform alert id. Raising an alert with an id that is already shown
    /// replaces it.
    pub fn alert_id(&self) -> i32 {
        match self {
            AlertKind::NewOrder => 1001,
            AlertKind::ProductionUpdate => 1002,
            AlertKind::LowInventory => 1003,
            AlertKind::Delivery => 1004,
            AlertKind::General => 1005,
            AlertKind::Remote {
                notification_id, ..
            } => string_hash(notification_id),
        }
    }
}

/// Where activating an alert leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    Orders,
    Production,
    Inventory,
    Notification(String),
}

impl DeepLink {
    pub fn target(&self) -> &'static str {
        match self {
            DeepLink::Orders => "orders",
            DeepLink::Production => "production",
            DeepLink::Inventory => "inventory",
            DeepLink::Notification(_) => "notifications",
        }
    }

    pub fn notification_id(&self) -> Option<&str> {
        match self {
            DeepLink::Notification(id) => Some(id),
            _ => None,
        }
    }
}

impl Display for DeepLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeepLink::Notification(id) => write!(f, "notifications/{id}"),
            other => write!(f, "{}", other.target()),
        }
    }
}

/// What the poller (or anyone else) asks the presenter to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    /// Long form shown when the alert is expanded.
    pub detail: Option<String>,
    pub priority: String,
    /// Epoch milliseconds of the underlying event.
    pub when: Option<i64>,
}

impl AlertRequest {
    pub fn new_order(order_number: &str, client_name: &str) -> Self {
        Self {
            kind: AlertKind::NewOrder,
            title: "Nouvelle commande".to_string(),
            message: format!("Commande #{order_number} de {client_name}"),
            detail: Some(format!(
                "Une nouvelle commande #{order_number} a été reçue de {client_name}."
            )),
            priority: "high".to_string(),
            when: None,
        }
    }

    pub fn production_update(production_id: &str, status: &str) -> Self {
        Self {
            kind: AlertKind::ProductionUpdate,
            title: "Mise à jour production".to_string(),
            message: format!("Production #{production_id}: {status}"),
            detail: Some(format!(
                "La production #{production_id} a été mise à jour. Nouveau statut: {status}"
            )),
            priority: "medium".to_string(),
            when: None,
        }
    }

    pub fn low_inventory(material: &str, current: f64, minimum: f64, unit: &str) -> Self {
        Self {
            kind: AlertKind::LowInventory,
            title: "Stock faible".to_string(),
            message: format!("{material}: {current}{unit} (seuil: {minimum}{unit})"),
            detail: Some(format!(
                "Le stock de {material} est faible: {current}{unit} restant (seuil minimum: {minimum}{unit}). Pensez à réapprovisionner."
            )),
            priority: "medium".to_string(),
            when: None,
        }
    }

    pub fn delivery(order_number: &str, delivery_time: &str) -> Self {
        Self {
            kind: AlertKind::Delivery,
            title: "Livraison programmée".to_string(),
            message: format!("Commande #{order_number} - {delivery_time}"),
            detail: Some(format!(
                "La livraison de la commande #{order_number} est programmée pour {delivery_time}."
            )),
            priority: "high".to_string(),
            when: None,
        }
    }

    pub fn general(title: &str, message: &str) -> Self {
        Self {
            kind: AlertKind::General,
            title: title.to_string(),
            message: message.to_string(),
            detail: Some(message.to_string()),
            priority: "low".to_string(),
            when: None,
        }
    }

    pub fn remote(notification: &RemoteNotification) -> Self {
        Self {
            kind: AlertKind::Remote {
                notification_id: notification.id.to_string(),
                category: Category::parse(&notification.kind),
            },
            title: notification.title.clone(),
            message: notification.message.clone(),
            detail: Some(notification.message.clone()),
            priority: notification
                .priority
                .clone()
                .unwrap_or_else(|| Notification::DEFAULT_PRIORITY.to_string()),
            when: Some(notification.timestamp),
        }
    }
}

/// A fully resolved platform alert, ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: i32,
    pub channel: Channel,
    pub urgency: Urgency,
    pub title: String,
    pub message: String,
    pub detail: Option<String>,
    pub deep_link: Option<DeepLink>,
    pub when: Option<i64>,
}

/// 32-bit hash of the UTF-16 code units, `h = 31 * h + c`, wrapping.
pub fn string_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32))
}
