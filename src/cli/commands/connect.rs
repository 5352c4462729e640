//! `warp --connect` - pick a stored connection and launch ssh

use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::terminated;
use crate::core::picker::{self, Picker};
use crate::core::session;
use crate::core::store::Store;

pub fn run(store: &Store, picker_impl: &dyn Picker) -> Result<()> {
    let records = store.fetch_all().into_diagnostic()?;
    if records.is_empty() {
        miette::bail!("no connections stored, use '-a' to add one");
    }

    let items: Vec<String> = records
        .iter()
        .map(|(_, record)| picker::to_display(record))
        .collect();

    let Some(selected) = picker_impl.pick(&items)? else {
        return terminated();
    };

    // A selection that no longer splits into five fields (a field contained
    // a space) aborts the same way a cancellation does
    let Some(record) = picker::from_selection(&selected) else {
        return terminated();
    };

    session::launch(&record)
}
