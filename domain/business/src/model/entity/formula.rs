use serde::{Deserialize, Serialize};

use crate::repository::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormuleBeton {
    pub id: i64,
    pub nom: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resistance_requise: Option<String>,
    #[serde(default)]
    pub quantite_produite_reference: Option<String>,
}

impl Resource for FormuleBeton {
    const PATH: &'static str = "formules/";
    const READ_ONLY: bool = true;

    fn id(&self) -> i64 {
        self.id
    }
}
