//! `warp --output` - dump all connections to a file
//!
//! The produced file round-trips through `--add`'s bulk-import path: a
//! `#`-prefixed header line, then one comma-joined record per line.

use std::fs;
use std::path::Path;

use console::style;
use miette::{Context, IntoDiagnostic, Result};

use crate::cli::helpers::input_with_default;
use crate::core::store::{ConnectionRecord, Store};

/// Fixed output filename within the chosen directory
pub const OUTPUT_FILE: &str = "warp.out";

pub fn run(store: &Store) -> Result<()> {
    let header = store.columns().into_diagnostic()?;
    let records: Vec<ConnectionRecord> = store
        .fetch_all()
        .into_diagnostic()?
        .into_iter()
        .map(|(_, record)| record)
        .collect();

    let dir = input_with_default("/path/to/write ?", ".")?;
    let path = Path::new(&dir).join(OUTPUT_FILE);

    fs::write(&path, render_file(&header, &records))
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot write {}", path.display()))?;

    println!(
        " > Wrote '{}' record(s) to {}",
        records.len(),
        style(path.display()).cyan()
    );
    Ok(())
}

pub fn render_file(header: &[String], records: &[ConnectionRecord]) -> String {
    let mut contents = String::new();
    contents.push('#');
    contents.push_str(&header.join(","));
    contents.push('\n');
    for record in records {
        contents.push_str(&record.to_row().join(","));
        contents.push('\n');
    }
    contents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::add;

    fn header() -> Vec<String> {
        ["environment", "hostname", "ip_address", "username", "password"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn records() -> Vec<ConnectionRecord> {
        vec![
            ConnectionRecord::parse_line("prod,host1,1.2.3.4,bob,secret").unwrap(),
            ConnectionRecord::parse_line("dev,host2,5.6.7.8,alice,hunter2").unwrap(),
        ]
    }

    #[test]
    fn file_starts_with_commented_header() {
        let contents = render_file(&header(), &records());
        assert!(contents.starts_with("#environment,hostname,ip_address,username,password\n"));
    }

    #[test]
    fn output_roundtrips_through_import() {
        let originals = records();
        let contents = render_file(&header(), &originals);
        let imported = add::parse_import(&contents).unwrap();
        assert_eq!(imported, originals);
    }

    #[test]
    fn empty_store_produces_header_only() {
        let contents = render_file(&header(), &[]);
        assert_eq!(contents.lines().count(), 1);
    }
}
