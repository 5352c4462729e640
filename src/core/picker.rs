//! Fuzzy selection over stored connections
//!
//! The picker contract is deliberately narrow: it takes an ordered list of
//! display strings and returns either exactly one of them or a cancellation.
//! Anything else (abort, empty list, picker failure) is cancellation, and the
//! calling operation stops before any mutation or subprocess launch.

use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;
use miette::{IntoDiagnostic, Result};

use crate::core::store::{ConnectionRecord, FIELD_COUNT};

pub trait Picker {
    /// Present the items in order; `Ok(None)` means the user cancelled.
    fn pick(&self, items: &[String]) -> Result<Option<String>>;
}

/// Interactive fuzzy-match picker.
pub struct FuzzyPicker;

impl Picker for FuzzyPicker {
    fn pick(&self, items: &[String]) -> Result<Option<String>> {
        if items.is_empty() {
            return Ok(None);
        }
        let choice = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a connection")
            .items(items)
            .default(0)
            .interact_opt()
            .into_diagnostic()?;
        Ok(choice.map(|idx| items[idx].clone()))
    }
}

/// Flatten a record into its display string: fields space-joined in column
/// order.
///
/// Known limitation carried from the original tool: a field that itself
/// contains a space cannot be split back apart by [`from_selection`].
pub fn to_display(record: &ConnectionRecord) -> String {
    record.fields().join(" ")
}

/// Split a chosen display string back into a record.
///
/// Returns `None` when the string does not split into exactly five fields,
/// which callers treat the same as a cancelled selection.
pub fn from_selection(selected: &str) -> Option<ConnectionRecord> {
    let fields: Vec<&str> = selected.split(' ').collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }
    Some(ConnectionRecord {
        environment: fields[0].to_string(),
        hostname: fields[1].to_string(),
        ip_address: fields[2].to_string(),
        username: fields[3].to_string(),
        password: fields[4].to_string(),
    })
}
