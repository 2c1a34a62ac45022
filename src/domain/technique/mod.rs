//! Self-help technique catalog.
//!
//! - `catalog` - The seven fixed techniques and their categories
//! - `prompt` - Prompt asking the model to explain one of them

mod catalog;
mod prompt;

pub use catalog::{find_technique, Technique, TechniqueCategory, TechniqueExplanation, CATALOG};
pub use prompt::{technique_prompt, TECHNIQUE_TEMPERATURE};
