mod inventory;
mod order;
mod production;

#[rustfmt::skip]
pub use {
    inventory::InventoryService,
    order::OrderService,
    production::ProductionService,
};
