//! Prompt and response schema for symptom decoding.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::domain::localization::Locale;

/// Sampling temperature used for symptom decoding.
pub const SYMPTOM_TEMPERATURE: f32 = 0.5;

/// Response schema handed to the model (OpenAPI subset, upper-case types).
pub static SYMPTOM_RESPONSE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "symptomTitle": {
                "type": "STRING",
                "description": "The clear and concise name of the symptom/illness. Example: 'Bronchitis', 'Diabetes'."
            },
            "definition": {
                "type": "STRING",
                "description": "A brief explanation of the symptom/illness to confirm it's the correct entry."
            },
            "technicalInfo": {
                "type": "OBJECT",
                "description": "Technical details from biodecoding.",
                "properties": {
                    "embryonicLayer": {
                        "type": "STRING",
                        "description": "The related embryonic layer (Ectoderm, Mesoderm, Endoderm)."
                    },
                    "conflictType": {
                        "type": "STRING",
                        "description": "The type of biological conflict (e.g., separation, devaluation, territory)."
                    },
                    "diseasePhaseBehavior": {
                        "type": "STRING",
                        "description": "Behavior in phases: sympathicotonia (active phase) and vagotonia (repair phase)."
                    }
                }
            },
            "biologicalMeaning": {
                "type": "STRING",
                "description": "Explanation of the biological 'purpose' of the symptom. The survival purpose of the biological program."
            },
            "conflicts": {
                "type": "ARRAY",
                "description": "List of underlying emotional conflicts. They should be clear and varied.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["symptomTitle", "definition", "biologicalMeaning", "conflicts"]
    })
});

/// Builds the decoding prompt for `symptom`, answered in `locale`'s language.
pub fn symptom_prompt(symptom: &str, locale: Locale) -> String {
    format!(
        r#"Act as an expert in biodecoding. Analyze the following symptom or ailment: "{symptom}".
Provide a complete and structured decoding. If the term is ambiguous, choose the most common interpretation.
The tone should be empowering and focused on self-observation. Do not give medical advice.
Emphasize that the illness is a biological survival program and that conflicts are subjective interpretations.
Generate the response exclusively in the specified JSON format, with all text content translated to {language}."#,
        symptom = symptom.trim(),
        language = locale.language_name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_symptom_and_language() {
        let prompt = symptom_prompt("  migraine ", Locale::Fr);
        assert!(prompt.contains("\"migraine\""));
        assert!(prompt.contains("translated to French."));
        assert!(prompt.contains("Do not give medical advice."));
    }

    #[test]
    fn schema_requires_core_fields() {
        let required = SYMPTOM_RESPONSE_SCHEMA["required"].as_array().unwrap();
        let names: Vec<_> = required.iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(
            names,
            vec!["symptomTitle", "definition", "biologicalMeaning", "conflicts"]
        );
        assert_eq!(SYMPTOM_RESPONSE_SCHEMA["properties"]["conflicts"]["type"], "ARRAY");
    }
}
