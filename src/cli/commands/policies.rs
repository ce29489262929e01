//! Policies command handler.

use anyhow::Result;

use crate::translation::TranslationPolicy;
use crate::ui::Style;

/// Lists all translation policies.
pub fn list_policies() {
    println!("{}", Style::header("Translation policies"));
    for policy in TranslationPolicy::all() {
        let marker = if *policy == TranslationPolicy::default() {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {}  {}{marker}",
            Style::value(format!("{:10}", policy.key())),
            Style::secondary(policy.description())
        );
    }
}

/// Shows a policy's description and system prompt template.
pub fn show_policy(name: &str) -> Result<()> {
    let policy = TranslationPolicy::resolve(name)?;

    println!("{}", Style::header("Translation policy"));
    println!();
    println!("  {}  {}", Style::label("Name:"), Style::value(policy.key()));
    println!(
        "  {}  {}",
        Style::label("Desc:"),
        Style::secondary(policy.description())
    );
    println!(
        "  {}  {}",
        Style::label("Sanitized:"),
        if policy.sanitizes_reply() { "yes" } else { "no" }
    );
    println!();
    println!("{}", Style::label("Prompt:"));
    println!("{}", policy.prompt_template());

    Ok(())
}
