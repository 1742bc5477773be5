//! Input and output row shapes for the dependency matrix.

use serde::{Deserialize, Serialize};

use crate::classify::{self, Category, Readiness};

/// SKU column value when the export carries no SKU for a resource.
pub const SKU_UNKNOWN: &str = "N/A";

// ============================================================================
// Input
// ============================================================================

/// One record from an `az resource list --output json` export.
///
/// Every scalar field defaults to the empty string when absent; the shape is
/// assumed, not validated.
#[derive(Debug, Deserialize)]
pub struct ResourceRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub resource_type: String,
    #[serde(default, rename = "resourceGroup")]
    pub resource_group: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub sku: Option<Sku>,
    #[serde(default)]
    pub properties: Option<RecordProperties>,
}

/// SKU block as it appears in the export, either top-level or nested under
/// `properties`.
#[derive(Debug, Default, Deserialize)]
pub struct Sku {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordProperties {
    #[serde(default)]
    pub sku: Option<Sku>,
}

impl ResourceRecord {
    /// Resolve the SKU name, preferring the top-level `sku.name` over
    /// `properties.sku.name`.
    ///
    /// An empty top-level name falls through to the nested location.
    pub fn sku_name(&self) -> &str {
        self.sku
            .as_ref()
            .and_then(|sku| sku.name.as_deref())
            .filter(|name| !name.is_empty())
            .or_else(|| {
                self.properties
                    .as_ref()
                    .and_then(|props| props.sku.as_ref())
                    .and_then(|sku| sku.name.as_deref())
            })
            .unwrap_or(SKU_UNKNOWN)
    }
}

// ============================================================================
// Output
// ============================================================================

/// One annotated row of the dependency matrix.
///
/// Field order is the CSV column order.
#[derive(Debug, Serialize)]
pub struct MatrixRow {
    #[serde(rename = "ResourceName")]
    pub name: String,
    #[serde(rename = "ResourceType")]
    pub resource_type: String,
    #[serde(rename = "ResourceGroup")]
    pub resource_group: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "DependsOn")]
    pub depends_on: String,
    #[serde(rename = "MigrationReadiness")]
    pub readiness: Readiness,
}

impl MatrixRow {
    /// Annotate a single input record. Pure per-record transform, no I/O.
    pub fn from_record(record: &ResourceRecord) -> Self {
        Self {
            name: record.name.clone(),
            resource_type: record.resource_type.clone(),
            resource_group: record.resource_group.clone(),
            location: record.location.clone(),
            sku: record.sku_name().to_string(),
            category: classify::category(&record.resource_type),
            depends_on: classify::dependencies(&record.resource_type),
            readiness: classify::readiness(&record.resource_type),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ResourceRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_sku_top_level() {
        let r = record(r#"{"sku": {"name": "Standard_LRS"}}"#);
        assert_eq!(r.sku_name(), "Standard_LRS");
    }

    #[test]
    fn test_sku_nested_in_properties() {
        let r = record(r#"{"properties": {"sku": {"name": "P1v2"}}}"#);
        assert_eq!(r.sku_name(), "P1v2");
    }

    #[test]
    fn test_sku_top_level_wins() {
        let r = record(
            r#"{"sku": {"name": "Standard_LRS"}, "properties": {"sku": {"name": "P1v2"}}}"#,
        );
        assert_eq!(r.sku_name(), "Standard_LRS");
    }

    #[test]
    fn test_sku_empty_top_level_falls_through() {
        let r = record(r#"{"sku": {"name": ""}, "properties": {"sku": {"name": "P1v2"}}}"#);
        assert_eq!(r.sku_name(), "P1v2");
    }

    #[test]
    fn test_sku_absent_is_sentinel() {
        let r = record("{}");
        assert_eq!(r.sku_name(), SKU_UNKNOWN);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let r = record("{}");
        assert_eq!(r.name, "");
        assert_eq!(r.resource_type, "");
        assert_eq!(r.resource_group, "");
        assert_eq!(r.location, "");
    }

    #[test]
    fn test_from_record_annotates() {
        let r = record(
            r#"{
                "name": "vm01",
                "type": "Microsoft.Compute/virtualMachines",
                "resourceGroup": "rg-prod",
                "location": "eastus",
                "sku": {"name": "Standard_D2s_v3"}
            }"#,
        );
        let row = MatrixRow::from_record(&r);
        assert_eq!(row.name, "vm01");
        assert_eq!(row.category, Category::Compute);
        assert_eq!(row.depends_on, "VNet; NIC; NSG; Disk");
        assert_eq!(row.readiness, Readiness::Redeploy);
        assert_eq!(row.sku, "Standard_D2s_v3");
    }

    #[test]
    fn test_from_record_empty_type_gets_defaults() {
        let row = MatrixRow::from_record(&record("{}"));
        assert_eq!(row.category, Category::Other);
        assert_eq!(row.depends_on, "None/Minimal");
        assert_eq!(row.readiness, Readiness::Redeploy);
        assert_eq!(row.sku, SKU_UNKNOWN);
    }
}
