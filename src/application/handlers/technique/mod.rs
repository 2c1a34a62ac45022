//! Technique handlers.

mod explain_technique;
mod list_techniques;

pub use explain_technique::{
    ExplainTechniqueCommand, ExplainTechniqueHandler, EXPLANATION_FAILED_MESSAGE,
};
pub use list_techniques::{ListTechniquesHandler, ListTechniquesQuery};
