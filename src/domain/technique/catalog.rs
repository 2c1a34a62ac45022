//! Fixed catalog of self-help techniques.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Family a technique belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechniqueCategory {
    /// Neuro-linguistic programming.
    Nlp,
    SymbolicActs,
    EmotionalHealing,
}

impl TechniqueCategory {
    /// Catalog label (the catalog is authored in Spanish).
    pub fn label(&self) -> &'static str {
        match self {
            TechniqueCategory::Nlp => "PNL",
            TechniqueCategory::SymbolicActs => "Actos Simbólicos",
            TechniqueCategory::EmotionalHealing => "Sanación Emocional",
        }
    }

    /// Key the presentation layer uses to look up the translated label.
    pub fn message_key(&self) -> String {
        format!(
            "technique_category_{}",
            self.label().replace(' ', "_").to_lowercase()
        )
    }
}

impl fmt::Display for TechniqueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A technique in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Technique {
    pub id: &'static str,
    /// Canonical name; this is what the model is asked to explain.
    pub name: &'static str,
    pub category: TechniqueCategory,
}

impl Technique {
    /// Key the presentation layer uses to look up the translated name.
    pub fn message_key(&self) -> String {
        format!("technique_name_{}", self.id)
    }
}

/// A technique together with its generated explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechniqueExplanation {
    pub technique: Technique,
    pub description: String,
}

pub const CATALOG: [Technique; 7] = [
    Technique {
        id: "circulo_excelencia",
        name: "Círculo de la Excelencia",
        category: TechniqueCategory::Nlp,
    },
    Technique {
        id: "anclaje_cinestesico",
        name: "Anclaje Cinestésico",
        category: TechniqueCategory::Nlp,
    },
    Technique {
        id: "reencuadre",
        name: "Cambiar el Significado (Reencuadre)",
        category: TechniqueCategory::Nlp,
    },
    Technique {
        id: "linea_tiempo",
        name: "Línea del Tiempo",
        category: TechniqueCategory::Nlp,
    },
    Technique {
        id: "psicomagia",
        name: "Psicomagia",
        category: TechniqueCategory::SymbolicActs,
    },
    Technique {
        id: "nino_interno",
        name: "Recuperación del Niño Interno",
        category: TechniqueCategory::EmotionalHealing,
    },
    Technique {
        id: "protocolo_duelo",
        name: "Protocolo de Duelo",
        category: TechniqueCategory::EmotionalHealing,
    },
];

/// Looks up a catalog technique by id.
pub fn find_technique(id: &str) -> Option<&'static Technique> {
    CATALOG.iter().find(|t| t.id == id)
}
