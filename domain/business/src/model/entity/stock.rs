use serde::{Deserialize, Serialize};

use crate::repository::Resource;

/// Raw material with its stock levels, served by `stock/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatierePremiere {
    pub id: i64,
    pub nom: String,
    pub unite: String,
    pub stock_actuel: f64,
    pub stock_minimum: f64,
    #[serde(default)]
    pub statut_stock: String,
    #[serde(default)]
    pub prix_unitaire: f64,
}

impl MatierePremiere {
    /// At or below its threshold. A zero threshold means "not tracked".
    pub fn is_low(&self) -> bool {
        self.stock_minimum > 0.0 && self.stock_actuel <= self.stock_minimum
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Normal,
    Faible,
    Critique,
}

impl StockStatus {
    pub fn value(&self) -> &'static str {
        match self {
            StockStatus::Normal => "normal",
            StockStatus::Faible => "faible",
            StockStatus::Critique => "critique",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::Normal => "Normal",
            StockStatus::Faible => "Faible",
            StockStatus::Critique => "Critique",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approvisionnement {
    pub id: i64,
    pub matiere_premiere: MatierePremiere,
    pub quantite: f64,
    pub fournisseur: String,
    pub prix_unitaire: f64,
    pub cout_total: f64,
    pub date: String,
}

impl Resource for MatierePremiere {
    const PATH: &'static str = "stock/";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Approvisionnement {
    const PATH: &'static str = "approvisionnements/";

    fn id(&self) -> i64 {
        self.id
    }
}
