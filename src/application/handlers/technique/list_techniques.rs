//! ListTechniquesHandler - Query handler for the technique catalog.

use crate::domain::technique::{Technique, TechniqueCategory, CATALOG};

/// Query for catalog techniques, optionally narrowed to one category.
#[derive(Debug, Clone, Default)]
pub struct ListTechniquesQuery {
    pub category: Option<TechniqueCategory>,
}

/// Handler for listing techniques. The catalog is fixed, so no ports are needed.
#[derive(Debug, Clone, Default)]
pub struct ListTechniquesHandler;

impl ListTechniquesHandler {
    pub fn new() -> Self {
        Self
    }

    /// Catalog order is preserved.
    pub fn handle(&self, query: ListTechniquesQuery) -> Vec<Technique> {
        CATALOG
            .iter()
            .filter(|t| query.category.map_or(true, |c| t.category == c))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_whole_catalog_in_order() {
        let techniques = ListTechniquesHandler::new().handle(ListTechniquesQuery::default());

        assert_eq!(techniques.len(), 7);
        assert_eq!(techniques[0].id, "circulo_excelencia");
        assert_eq!(techniques[6].id, "protocolo_duelo");
    }

    #[test]
    fn filters_by_category() {
        let techniques = ListTechniquesHandler::new().handle(ListTechniquesQuery {
            category: Some(TechniqueCategory::EmotionalHealing),
        });

        let ids: Vec<_> = techniques.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["nino_interno", "protocolo_duelo"]);
    }
}
