use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// What a notification is about. Stored in its snake_case form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NewOrder,
    ProductionUpdate,
    LowInventory,
    Delivery,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NewOrder => "new_order",
            Category::ProductionUpdate => "production_update",
            Category::LowInventory => "low_inventory",
            Category::Delivery => "delivery",
            Category::General => "general",
        }
    }

    /// Lenient parse of the spellings the backend uses. Unknown values are
    /// `General`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "new_order" | "order" | "commande" => Category::NewOrder,
            "production_update" | "production" => Category::ProductionUpdate,
            "low_inventory" | "inventory" | "inventaire" | "stock" => Category::LowInventory,
            "delivery" | "livraison" => Category::Delivery,
            _ => Category::General,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
