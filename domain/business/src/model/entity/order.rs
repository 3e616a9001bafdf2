use serde::{Deserialize, Serialize};

use crate::repository::Resource;

/// Customer order as served by `commandes/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commande {
    pub id: i64,
    #[serde(rename = "client")]
    pub client_id: i64,
    #[serde(rename = "chantier", default)]
    pub chantier_id: Option<i64>,
    pub date_commande: String,
    #[serde(default)]
    pub date_livraison_souhaitee: String,
    pub statut: String,
    #[serde(default)]
    pub client_nom: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub date_livraison_prevue: Option<String>,
    #[serde(rename = "deliveryNotified", default)]
    pub delivery_notified: bool,
    #[serde(default)]
    pub lignes: Option<Vec<LigneCommande>>,
}

impl Commande {
    /// Human readable reference: the order number when present, otherwise `#id`.
    pub fn reference(&self) -> String {
        match &self.numero {
            Some(numero) if !numero.is_empty() => numero.clone(),
            _ => format!("#{}", self.id),
        }
    }

    /// Whether the planned delivery falls on `day` (`YYYY-MM-DD`).
    pub fn is_delivered_on(&self, day: &str) -> bool {
        self.date_livraison_prevue
            .as_deref()
            .is_some_and(|date| date.starts_with(day))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LigneCommande {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "formule")]
    pub formule_id: i64,
    pub quantite: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandeStatus {
    EnAttente,
    EnProduction,
    Terminee,
    Annulee,
}

impl CommandeStatus {
    pub fn value(&self) -> &'static str {
        match self {
            CommandeStatus::EnAttente => "en_attente",
            CommandeStatus::EnProduction => "en_production",
            CommandeStatus::Terminee => "terminee",
            CommandeStatus::Annulee => "annulee",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CommandeStatus::EnAttente => "En attente",
            CommandeStatus::EnProduction => "En production",
            CommandeStatus::Terminee => "Terminée",
            CommandeStatus::Annulee => "Annulée",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        [
            CommandeStatus::EnAttente,
            CommandeStatus::EnProduction,
            CommandeStatus::Terminee,
            CommandeStatus::Annulee,
        ]
        .into_iter()
        .find(|status| status.value() == value)
    }
}

impl Resource for Commande {
    const PATH: &'static str = "commandes/";

    fn id(&self) -> i64 {
        self.id
    }
}
