use super::{Category, Urgency};

/// The four alert channels, with the metadata sinks display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Orders,
    Production,
    Inventory,
    General,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Orders,
        Channel::Production,
        Channel::Inventory,
        Channel::General,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Channel::Orders => "orders_channel",
            Channel::Production => "production_channel",
            Channel::Inventory => "inventory_channel",
            Channel::General => "general_channel",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Orders => "Commandes",
            Channel::Production => "Production",
            Channel::Inventory => "Inventaire",
            Channel::General => "Général",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Channel::Orders => "Notifications pour les nouvelles commandes et mises à jour",
            Channel::Production => "Notifications pour les mises à jour de production",
            Channel::Inventory => "Notifications pour les alertes d'inventaire",
            Channel::General => "Notifications générales de l'application",
        }
    }

    pub fn importance(&self) -> Urgency {
        match self {
            Channel::Orders => Urgency::High,
            Channel::Production | Channel::Inventory => Urgency::Default,
            Channel::General => Urgency::Low,
        }
    }

    pub fn for_category(category: Category) -> Self {
        match category {
            Category::NewOrder | Category::Delivery => Channel::Orders,
            Category::ProductionUpdate => Channel::Production,
            Category::LowInventory => Channel::Inventory,
            Category::General => Channel::General,
        }
    }
}
