//! CSV export of the filtered view
//!
//! Serializes the currently filtered view (search applied, pagination
//! ignored) with the fixed header `ID,Title,Price,Description`. String
//! fields are quoted with embedded quotes doubled; embedded newlines are
//! not handled, matching the upstream format.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};

use crate::constants::EXPORT_FILENAME;
use crate::models::Product;

/// Doubles embedded quotes for a quoted CSV field
fn escape_quotes(field: &str) -> String {
    field.replace('"', "\"\"")
}

/// Renders the products as CSV text
pub fn to_csv(products: &[Product]) -> String {
    let mut lines = vec![String::from("ID,Title,Price,Description")];
    for p in products {
        lines.push(format!(
            "{},\"{}\",{},\"{}\"",
            p.id,
            escape_quotes(&p.title),
            p.price,
            escape_quotes(&p.description),
        ));
    }
    lines.join("\n")
}

/// Writes the products as `products.csv` under `dir`. Refuses an empty view
/// so the caller can surface a warning instead of producing a header-only
/// file.
pub fn write_csv(products: &[Product], dir: &Path) -> anyhow::Result<PathBuf> {
    if products.is_empty() {
        bail!("nothing to export: the filtered view is empty");
    }
    let path = dir.join(EXPORT_FILENAME);
    fs::write(&path, to_csv(products))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
