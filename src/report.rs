//! Load the resource export, annotate it, and write the matrix.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::classify::Category;
use crate::model::{MatrixRow, ResourceRecord};
use crate::ui;

/// CSV column set, in output order.
const HEADER: [&str; 8] = [
    "ResourceName",
    "ResourceType",
    "ResourceGroup",
    "Location",
    "SKU",
    "Category",
    "DependsOn",
    "MigrationReadiness",
];

/// Read an `az resource list` JSON export into memory.
pub fn load_resources(path: &Path) -> Result<Vec<ResourceRecord>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid resource export in {}", path.display()))
}

/// Annotate every record, one row per record, preserving input order.
pub fn build_matrix(resources: &[ResourceRecord]) -> Vec<MatrixRow> {
    resources.iter().map(MatrixRow::from_record).collect()
}

/// Write the matrix as CSV.
///
/// The header row is written unconditionally, so an empty input yields a
/// header-only file.
pub fn write_csv(rows: &[MatrixRow], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Could not create {}", path.display()))?;

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .flush()
        .with_context(|| format!("Could not write {}", path.display()))
}

/// Print per-category row counts, categories in rule-table order.
pub fn print_summary(rows: &[MatrixRow]) {
    ui::header("Category Summary");
    for category in Category::ALL {
        let count = rows.iter().filter(|row| row.category == category).count();
        if count > 0 {
            ui::kv(category.as_str(), &count.to_string());
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
