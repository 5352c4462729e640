//! `warp --show` - render all connections with their rowids

use miette::{IntoDiagnostic, Result};

use crate::cli::table;
use crate::core::store::Store;

pub fn run(store: &Store) -> Result<()> {
    let mut header = store.columns().into_diagnostic()?;
    header.insert(0, "ID".to_string());

    let rows: Vec<Vec<String>> = store
        .fetch_all()
        .into_diagnostic()?
        .into_iter()
        .map(|(id, record)| {
            let mut cells = vec![id.to_string()];
            cells.extend(record.to_row());
            cells
        })
        .collect();

    print!("{}", table::render(&rows, &header));
    Ok(())
}
