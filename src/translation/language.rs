//! Target language resolution and the list of offered languages.

use anyhow::{Result, bail};

use crate::ui::Style;

/// Language codes (ISO 639-1) offered by the chat rooms, and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
    ("pl", "Polish"),
    ("tr", "Turkish"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("tl", "Filipino"),
    ("he", "Hebrew"),
    ("uk", "Ukrainian"),
    ("cs", "Czech"),
    ("hu", "Hungarian"),
    ("ro", "Romanian"),
    ("bg", "Bulgarian"),
    ("hr", "Croatian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("et", "Estonian"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("el", "Greek"),
    ("is", "Icelandic"),
    ("ga", "Irish"),
    ("mt", "Maltese"),
    ("cy", "Welsh"),
    ("eu", "Basque"),
    ("ca", "Catalan"),
    ("gl", "Galician"),
];

/// Prints all known language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Returns the language name for a known code.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Resolves user input to the language name put in the prompt.
///
/// Known codes are expanded (`es` becomes `Spanish`); anything else is taken
/// to be a language name already and passed through.
///
/// # Errors
///
/// Returns an error if the input is empty.
pub fn resolve_language(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        bail!("Target language must not be empty");
    }

    Ok(language_name(input).map_or_else(|| input.to_string(), str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language_code() {
        assert_eq!(resolve_language("es").unwrap(), "Spanish");
        assert_eq!(resolve_language("FR").unwrap(), "French");
        assert_eq!(resolve_language(" ja ").unwrap(), "Japanese");
    }

    #[test]
    fn test_resolve_language_name_passthrough() {
        assert_eq!(resolve_language("French").unwrap(), "French");
        assert_eq!(
            resolve_language("Brazilian Portuguese").unwrap(),
            "Brazilian Portuguese"
        );
    }

    #[test]
    fn test_resolve_language_empty() {
        assert!(resolve_language("").is_err());
        assert!(resolve_language("   ").is_err());
    }

    #[test]
    fn test_language_name_unknown() {
        assert_eq!(language_name("xx"), None);
        assert_eq!(language_name("tl"), Some("Filipino"));
    }
}
