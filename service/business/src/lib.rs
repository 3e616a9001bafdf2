mod inventory;
mod order;
mod production;

#[rustfmt::skip]
pub use {
    inventory::InventoryServiceImpl,
    order::OrderServiceImpl,
    production::ProductionServiceImpl,
};

/// Wire format of the date filters and date fields.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
