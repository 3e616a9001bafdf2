use serde::{Deserialize, Serialize};

use crate::repository::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsommationCarburant {
    pub id: i64,
    pub vehicule: String,
    pub quantite: f64,
    pub prix_unitaire: f64,
    pub cout_total: f64,
    pub date: String,
    #[serde(default)]
    pub kilometrage: Option<i64>,
}

impl Resource for ConsommationCarburant {
    const PATH: &'static str = "carburant/";

    fn id(&self) -> i64 {
        self.id
    }
}
