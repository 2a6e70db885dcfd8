use crate::models::CatalogRow;
use anyhow::{bail, Context, Result};
use csv::Reader;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Reads the catalog CSV into header-keyed rows. A missing file is the
/// only fatal startup error; malformed records abort the run as well
/// since the export is expected to be machine-written.
pub fn read_rows(path: &Path) -> Result<Vec<CatalogRow>> {
    if !path.exists() {
        bail!("CSV not found: {}", path.display());
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record =
            result.with_context(|| format!("Malformed CSV record in {}", path.display()))?;
        let fields: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        rows.push(CatalogRow::new(fields));
    }

    debug!(rows = rows.len(), "Catalog loaded");
    Ok(rows)
}
