use super::policy::TranslationPolicy;

pub const GLOSSARY_HEADER: &str = "GLOSSARY (optional):";
pub const TEXT_HEADER: &str = "TEXT:";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(policy: TranslationPolicy, target_language: &str) -> String {
    // {target_language} is a placeholder for string replacement, not a format argument
    policy
        .prompt_template()
        .replace("{target_language}", target_language)
}

/// Builds the user message: the glossary section (empty when absent)
/// followed by the text to translate.
pub fn build_user_content(text: &str, glossary: Option<&str>) -> String {
    let glossary = glossary.unwrap_or_default();
    format!("{GLOSSARY_HEADER}\n{glossary}\n\n{TEXT_HEADER}\n{text}")
}
