//! `warp --add` - add connection(s) manually or from a file

use std::fs;
use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{confirm, input, terminated};
use crate::cli::table;
use crate::core::store::{ConnectionRecord, Store};

pub fn run(store: &mut Store) -> Result<()> {
    let header = store.columns().into_diagnostic()?;

    let records = if confirm("Do you have a file to load?")? {
        let path = input("/path/to/file")?;
        parse_import_file(Path::new(&path))?
    } else {
        println!(
            " > Enter the details in '{}' format",
            style(header.join(",")).bold()
        );
        let line = input("INPUT")?;
        vec![ConnectionRecord::parse_line(&line).into_diagnostic()?]
    };

    println!("{}", style(" > The below info will be added, proceed ?").bold());
    println!();
    let rows: Vec<Vec<String>> = records.iter().map(ConnectionRecord::to_row).collect();
    print!("{}", table::render(&rows, &header));
    println!();

    if !confirm("Proceed?")? {
        return terminated();
    }

    let count = store.insert_many(&records).into_diagnostic()?;
    println!(" > '{count}' insert(s) {}", style("successful").green());
    Ok(())
}

/// Read a bulk-import file: one comma-separated record per line, lines
/// starting with `#` skipped. Symmetric with the `--output` file format.
/// Any line with the wrong field count aborts the whole batch.
pub fn parse_import_file(path: &Path) -> Result<Vec<ConnectionRecord>> {
    let contents = fs::read_to_string(path)
        .map_err(|_| miette::miette!("file not found: {}", path.display()))?;
    parse_import(&contents)
}

pub fn parse_import(contents: &str) -> Result<Vec<ConnectionRecord>> {
    contents
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| ConnectionRecord::parse_line(line).into_diagnostic())
        .collect()
}
