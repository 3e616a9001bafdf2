use serde::{Deserialize, Serialize};

use crate::repository::Resource;

/// Production order as served by `production/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdreProduction {
    pub id: i64,
    #[serde(default)]
    pub numero_bon: Option<String>,
    #[serde(rename = "commande")]
    pub commande_id: i64,
    #[serde(rename = "formule")]
    pub formule_id: i64,
    pub quantite_produire: f64,
    pub date_production: String,
    #[serde(default)]
    pub heure_production: Option<String>,
    pub statut: String,
    #[serde(default)]
    pub matieres_sorties_calculees: bool,
}

impl OrdreProduction {
    pub fn reference(&self) -> String {
        match &self.numero_bon {
            Some(numero) if !numero.is_empty() => numero.clone(),
            _ => format!("#{}", self.id),
        }
    }

    /// `PRET` in any casing.
    pub fn is_ready(&self) -> bool {
        self.statut.eq_ignore_ascii_case(Self::READY)
    }

    pub const READY: &'static str = "PRET";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionStatus {
    EnCours,
    Termine,
    Annule,
}

impl ProductionStatus {
    pub fn value(&self) -> &'static str {
        match self {
            ProductionStatus::EnCours => "en_cours",
            ProductionStatus::Termine => "termine",
            ProductionStatus::Annule => "annule",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductionStatus::EnCours => "En cours",
            ProductionStatus::Termine => "Terminé",
            ProductionStatus::Annule => "Annulé",
        }
    }
}

impl Resource for OrdreProduction {
    const PATH: &'static str = "production/";

    fn id(&self) -> i64 {
        self.id
    }
}
