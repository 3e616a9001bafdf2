use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on 4xx/5xx answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub field_errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    /// One-line summary: `detail` if set, else the field errors.
    pub fn summary(&self) -> Option<String> {
        if let Some(detail) = self.detail.as_ref().filter(|d| !d.is_empty()) {
            return Some(detail.clone());
        }
        let fields = self.field_errors.as_ref()?;
        let parts = fields
            .iter()
            .map(|(field, errors)| format!("{field}: {}", errors.join(", ")))
            .collect::<Vec<_>>();
        (!parts.is_empty()).then(|| parts.join("; "))
    }
}
