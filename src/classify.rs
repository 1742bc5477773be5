//! Classification tables for Azure resource types.
//!
//! All three classifiers are total functions over arbitrary type strings:
//! anything unrecognized falls through to a default instead of erroring.

use std::fmt;

use serde::{Serialize, Serializer};

// ============================================================================
// Category
// ============================================================================

/// Coarse functional grouping assigned to a resource type for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Compute,
    AppServices,
    Database,
    Networking,
    Storage,
    Security,
    Monitoring,
    Messaging,
    GovernanceUx,
    BackupRecovery,
    Other,
}

impl Category {
    /// All categories in rule-table order, `Other` last.
    pub const ALL: [Self; 11] = [
        Self::Compute,
        Self::AppServices,
        Self::Database,
        Self::Networking,
        Self::Storage,
        Self::Security,
        Self::Monitoring,
        Self::Messaging,
        Self::GovernanceUx,
        Self::BackupRecovery,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compute => "Compute",
            Self::AppServices => "App Services",
            Self::Database => "Database",
            Self::Networking => "Networking",
            Self::Storage => "Storage",
            Self::Security => "Security",
            Self::Monitoring => "Monitoring",
            Self::Messaging => "Messaging",
            Self::GovernanceUx => "Governance/UX",
            Self::BackupRecovery => "Backup & Recovery",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Ordered containment rules; the first namespace hit wins.
const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["Microsoft.Compute"], Category::Compute),
    (&["Microsoft.Web"], Category::AppServices),
    (&["Microsoft.Sql"], Category::Database),
    (&["Microsoft.Network"], Category::Networking),
    (&["Microsoft.Storage"], Category::Storage),
    (&["Microsoft.KeyVault"], Category::Security),
    (&["Microsoft.Insights", "OperationalInsights"], Category::Monitoring),
    (&["Microsoft.ServiceBus"], Category::Messaging),
    (&["Microsoft.Portal"], Category::GovernanceUx),
    (&["Microsoft.RecoveryServices"], Category::BackupRecovery),
];

/// Map a resource type to its category by vendor namespace.
pub fn category(resource_type: &str) -> Category {
    for (needles, category) in CATEGORY_RULES {
        if needles.iter().any(|needle| resource_type.contains(needle)) {
            return *category;
        }
    }
    Category::Other
}

// ============================================================================
// Dependencies
// ============================================================================

/// Dependency list shown for resource types with no known dependencies.
pub const NO_DEPENDENCIES: &str = "None/Minimal";

/// Typical infrastructure dependencies per resource type, exact match.
const DEPENDENCY_RULES: &[(&str, &[&str])] = &[
    ("Microsoft.Web/sites", &["App Service Plan", "Database"]),
    ("Microsoft.Web/serverFarms", &["VNet (if ASE)"]),
    (
        "Microsoft.Sql/servers/databases",
        &["SQL Server", "VNet (Private Endpoint)"],
    ),
    ("Microsoft.Sql/servers", &["VNet (Private Endpoint)"]),
    ("Microsoft.Compute/virtualMachines", &["VNet", "NIC", "NSG", "Disk"]),
    ("Microsoft.Network/privateEndpoints", &["VNet", "Subnet"]),
    ("Microsoft.Network/networkInterfaces", &["VNet", "Subnet"]),
    ("Microsoft.Network/networkSecurityGroups", &["Subnet/NIC"]),
    ("Microsoft.Storage/storageAccounts", &["VNet (Private Endpoint)"]),
    ("Microsoft.KeyVault/vaults", &["VNet (Private Endpoint)"]),
    (
        "Microsoft.ServiceBus/namespaces",
        &["VNet (Private Endpoint if enabled)"],
    ),
];

/// Render the dependency list for a resource type as one `"; "`-joined string.
///
/// Unknown types, including unknown sub-kinds of a known namespace, map to
/// [`NO_DEPENDENCIES`].
pub fn dependencies(resource_type: &str) -> String {
    DEPENDENCY_RULES
        .iter()
        .find(|(known, _)| *known == resource_type)
        .map_or_else(|| NO_DEPENDENCIES.to_string(), |(_, deps)| deps.join("; "))
}

// ============================================================================
// Migration readiness
// ============================================================================

/// Verdict on whether a resource can be declaratively recreated during a
/// migration or needs manual reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Redeploy,
    Rebuild,
}

impl Readiness {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Redeploy => "Redeploy",
            Self::Rebuild => "Rebuild",
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Readiness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

const REDEPLOY_PREFIXES: &[&str] = &[
    "Microsoft.Web/",
    "Microsoft.Sql/",
    "Microsoft.Storage/",
    "Microsoft.Compute/",
    "Microsoft.KeyVault/",
    "Microsoft.Network/",
];

const REBUILD_PREFIXES: &[&str] = &[
    "Microsoft.Portal/",
    "Microsoft.Insights/",
    "Microsoft.RecoveryServices/",
];

/// Migration verdict by provider prefix. Unknown providers default to
/// `Redeploy`, same as the first group.
pub fn readiness(resource_type: &str) -> Readiness {
    if REDEPLOY_PREFIXES.iter().any(|p| resource_type.starts_with(p)) {
        Readiness::Redeploy
    } else if REBUILD_PREFIXES.iter().any(|p| resource_type.starts_with(p)) {
        Readiness::Rebuild
    } else {
        Readiness::Redeploy
    }
}

// ============================================================================
// Tests
// ============================================================================
