//! Structured symptom decoding returned by the text model.

use serde::{Deserialize, Serialize};

/// A decoded symptom.
///
/// Field names are camelCase on the wire to match the response schema the
/// model is asked to fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomData {
    /// Name of the symptom or illness, e.g. "Bronchitis".
    pub symptom_title: String,
    /// Short definition confirming the right entry was picked.
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_info: Option<TechnicalInfo>,
    /// The survival purpose of the biological program.
    pub biological_meaning: String,
    /// Underlying emotional conflicts.
    pub conflicts: Vec<String>,
}

/// Optional technical details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embryonic_layer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_phase_behavior: Option<String>,
}

impl TechnicalInfo {
    /// True when none of the sub-fields carry text.
    pub fn is_empty(&self) -> bool {
        self.embryonic_layer.is_none()
            && self.conflict_type.is_none()
            && self.disease_phase_behavior.is_none()
    }
}

impl SymptomData {
    /// Parses the model's JSON answer.
    ///
    /// Models sometimes wrap JSON in a Markdown code fence; the fence is
    /// stripped before parsing.
    pub fn from_model_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(strip_code_fence(raw.trim()))
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
