/// Query parameters accepted by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    /// Resource specific filters, e.g. `("statut", "PRET")`.
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((key.into(), value.to_string()));
        self
    }

    /// Flatten into `(key, value)` pairs for the query string.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 3);
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering".to_string(), ordering.clone()));
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_keep_filter_order() {
        let query = ListQuery::default()
            .page(2)
            .filter("date_commande_after", "2024-05-01")
            .filter("client", 7);
        assert_eq!(
            vec![
                ("page".to_string(), "2".to_string()),
                ("date_commande_after".to_string(), "2024-05-01".to_string()),
                ("client".to_string(), "7".to_string()),
            ],
            query.to_pairs()
        );
    }
}
