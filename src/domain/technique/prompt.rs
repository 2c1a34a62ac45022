//! Prompt for technique explanations.

use crate::domain::localization::Locale;

/// Sampling temperature used for technique explanations.
pub const TECHNIQUE_TEMPERATURE: f32 = 0.7;

/// Builds the coaching prompt for `technique_name`, answered in `locale`'s language.
pub fn technique_prompt(technique_name: &str, locale: Locale) -> String {
    format!(
        r#"Act as a coach in NLP and emotional wellness.
Explain the following technique clearly, simply, and practically: "{technique_name}".
Describe what it is, what it's for, and the basic steps to perform it as a self-help exercise.
The tone should be educational and motivating. Do not generate titles, only the explanatory text.
Use line breaks to separate paragraphs and lists.
The entire response must be in {language}."#,
        language = locale.language_name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_technique_and_language() {
        let prompt = technique_prompt("Psicomagia", Locale::It);
        assert!(prompt.contains("\"Psicomagia\""));
        assert!(prompt.ends_with("must be in Italian."));
    }
}
