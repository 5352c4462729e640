//! Shared prompt helpers for interactive commands
//!
//! All interactive input goes through dialoguer so an interrupt inside a
//! prompt surfaces as an error and unwinds to main, which still closes the
//! store before exiting.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use miette::{IntoDiagnostic, Result};

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .into_diagnostic()
}

/// Prompt for one line of input.
pub fn input(prompt: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .into_diagnostic()
}

/// Prompt for one line of input with a default shown and applied on empty.
pub fn input_with_default(prompt: &str, default: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .into_diagnostic()
}

/// Normal abort path for a declined confirmation or cancelled selection.
/// Exits non-zero, but only after main has committed and closed the store.
pub fn terminated<T>() -> Result<T> {
    Err(miette::miette!("operation terminated"))
}
