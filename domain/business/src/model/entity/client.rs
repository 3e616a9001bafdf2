use serde::{Deserialize, Serialize};

use crate::repository::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub nom: String,
    #[serde(default)]
    pub adresse: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date_creation: String,
}

/// Work site, always attached to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chantier {
    pub id: i64,
    pub nom: String,
    #[serde(default)]
    pub adresse: String,
    pub client: Client,
    #[serde(default)]
    pub date_debut: String,
    #[serde(default)]
    pub date_fin_prevue: String,
    #[serde(default)]
    pub statut: String,
}

impl Resource for Client {
    const PATH: &'static str = "clients/";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Chantier {
    const PATH: &'static str = "chantiers/";

    fn id(&self) -> i64 {
        self.id
    }
}
