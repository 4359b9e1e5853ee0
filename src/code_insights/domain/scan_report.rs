use serde::Deserialize;

/// ScanReport - the vet JSON report as loaded from disk
///
/// Only the parts of the report needed to derive Code Insights artifacts are
/// modelled. Every collection defaults to empty because the report is written
/// by a protobuf JSON encoder, which omits empty fields. Field names accept
/// both the camelCase and the original proto (snake_case) spelling.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanReport {
    pub packages: Vec<PackageEntry>,
    pub manifests: Vec<Manifest>,
}

impl ScanReport {
    /// Resolves the file path a package should be annotated against.
    ///
    /// Only the package's first manifest ID is considered. The path of the
    /// first manifest with that ID is returned, or an empty string when the
    /// package lists no manifests or the ID is unknown.
    pub fn manifest_path(&self, package: &PackageEntry) -> &str {
        package
            .manifests
            .first()
            .and_then(|id| self.manifests.iter().find(|m| &m.id == id))
            .map(|m| m.path.as_str())
            .unwrap_or("")
    }
}

/// A single package with everything the scanner found about it
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageEntry {
    pub package: PackageDetails,
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(alias = "malware_info")]
    pub malware_info: Vec<MalwareInfo>,
    pub violations: Vec<Violation>,
    pub threats: Vec<Threat>,
    /// Manifest IDs this package was declared in
    pub manifests: Vec<String>,
}

impl PackageEntry {
    pub fn name(&self) -> &str {
        &self.package.name
    }

    pub fn version(&self) -> &str {
        &self.package.version
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PackageDetails {
    pub ecosystem: String,
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vulnerability {
    pub id: String,
    pub title: String,
    /// Ordered severity ratings; only the first one is meaningful here
    pub severities: Vec<VulnerabilitySeverity>,
}

impl Vulnerability {
    /// Risk of the first listed severity rating, if any
    pub fn primary_risk(&self) -> Option<Risk> {
        self.severities.first().map(|s| s.risk)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VulnerabilitySeverity {
    pub risk: Risk,
}

/// Risk level attached to a vulnerability severity rating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Risk {
    Critical,
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MalwareInfo {
    #[serde(rename = "type")]
    pub kind: MalwareType,
    #[serde(alias = "threat_id")]
    pub threat_id: String,
}

/// Classification of a malware analysis result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MalwareType {
    Malicious,
    Suspicious,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A policy violation raised by a filter
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Violation {
    pub filter: Filter,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub name: String,
    pub summary: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Threat {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub id: String,
    pub path: String,
}
