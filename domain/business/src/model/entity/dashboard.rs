use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub commandes_total: i64,
    pub commandes_en_cours: i64,
    pub production_mensuelle: f64,
    pub chiffre_affaires_mensuel: f64,
    pub stock_critique: i64,
    pub consommation_carburant_mensuelle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionQuotidienne {
    pub date: String,
    pub quantite: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionParType {
    pub type_beton: String,
    pub quantite_totale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionStats {
    #[serde(default)]
    pub production_quotidienne: Vec<ProductionQuotidienne>,
    #[serde(default)]
    pub production_par_type: Vec<ProductionParType>,
}
