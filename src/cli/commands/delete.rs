//! `warp --delete` - delete connection(s) by id or range
//!
//! Fail-fast contract: every id in the selector is looked up before anything
//! is deleted, so a selector naming a missing row deletes nothing at all.

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{confirm, input, terminated};
use crate::cli::table;
use crate::core::range;
use crate::core::store::{Store, StoreError};

pub fn run(store: &mut Store) -> Result<()> {
    let mut header = store.columns().into_diagnostic()?;
    header.insert(0, "ID".to_string());

    println!(
        " > Enter the rowid's to drop in {} format",
        style("id1,id2 or range:'id3_id6'").bold()
    );
    let selector = input("INPUT")?;
    let ids = range::expand(&selector).into_diagnostic()?;

    // Validate the whole batch before touching anything
    let mut rows = Vec::with_capacity(ids.len());
    for id in &ids {
        let (rowid, record) = match store.fetch_by_id(id) {
            Ok(found) => found,
            Err(StoreError::NotFound(_)) => {
                miette::bail!("Invalid range, use '-s' to validate");
            }
            Err(e) => return Err(e).into_diagnostic(),
        };
        let mut cells = vec![rowid.to_string()];
        cells.extend(record.to_row());
        rows.push(cells);
    }

    println!(
        "{}",
        style(" > Below data would be deleted... proceed ?").bold()
    );
    println!();
    print!("{}", table::render(&rows, &header));
    println!();

    if !confirm("Proceed?")? {
        return terminated();
    }

    let count = store.delete_by_ids(&ids).into_diagnostic()?;
    println!(" > '{count}' drop(s) {}", style("successful").green());
    Ok(())
}
