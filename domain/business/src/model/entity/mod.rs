mod client;
mod dashboard;
mod formula;
mod fuel;
mod invoice;
mod order;
mod production;
mod stock;
mod user;

#[rustfmt::skip]
pub use {
    client::{Chantier, Client},
    dashboard::{DashboardStats, ProductionParType, ProductionQuotidienne, ProductionStats},
    formula::FormuleBeton,
    fuel::ConsommationCarburant,
    invoice::Facture,
    order::{Commande, CommandeStatus, LigneCommande},
    production::{OrdreProduction, ProductionStatus},
    stock::{Approvisionnement, MatierePremiere, StockStatus},
    user::User,
};
