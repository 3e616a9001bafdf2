use serde::{Deserialize, Serialize};

use super::Commande;
use crate::repository::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facture {
    pub id: i64,
    pub numero_facture: String,
    pub commande: Commande,
    pub date_emission: String,
    pub date_echeance: String,
    pub montant_ht: f64,
    pub tva: f64,
    pub montant_ttc: f64,
    pub statut: String,
}

impl Resource for Facture {
    const PATH: &'static str = "factures/";

    fn id(&self) -> i64 {
        self.id
    }
}
