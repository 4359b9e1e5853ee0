use crate::code_insights::domain::{
    Annotation, AnnotationSeverity, AnnotationType, Finding, MalwareInfo, MalwareType,
    PackageEntry, ScanReport, Threat, Violation, Vulnerability,
};

/// Base URL of the public malware analysis pages
const MALYSIS_BASE_URL: &str = "https://app.safedep.io/community/malysis/";

/// Prefix of malware threat IDs that the analysis page URL does not carry
const MALWARE_THREAT_ID_PREFIX: &str = "SD-MAL-";

/// Annotator service for turning findings into Code Insights annotations
///
/// Emits one annotation per finding, packages in input order and each
/// package's findings in [`PackageEntry::findings`] order. Every annotation
/// points at the package's manifest path.
pub struct Annotator;

impl Annotator {
    /// Generates annotations for every finding in the scan report
    ///
    /// An empty report yields no annotations. Malware entries of an
    /// unrecognised type are skipped.
    pub fn generate_annotations(document: &ScanReport) -> Vec<Annotation> {
        document
            .packages
            .iter()
            .flat_map(|package| {
                let manifest_path = document.manifest_path(package);
                package
                    .findings()
                    .filter_map(move |finding| Self::annotate(package, finding, manifest_path))
            })
            .collect()
    }

    /// Link to the malware analysis page for a threat ID
    pub fn malysis_link(threat_id: &str) -> String {
        let id = threat_id
            .strip_prefix(MALWARE_THREAT_ID_PREFIX)
            .unwrap_or(threat_id);
        format!("{}{}", MALYSIS_BASE_URL, id)
    }

    fn annotate(
        package: &PackageEntry,
        finding: Finding<'_>,
        manifest_path: &str,
    ) -> Option<Annotation> {
        match finding {
            Finding::Malware(info) => Self::malware_annotation(package, info, manifest_path),
            Finding::Vulnerability(vuln) => {
                Some(Self::vulnerability_annotation(vuln, manifest_path))
            }
            Finding::Violation(violation) => {
                Some(Self::violation_annotation(violation, manifest_path))
            }
            Finding::Threat(threat) => Some(Self::threat_annotation(threat, manifest_path)),
        }
    }

    fn malware_annotation(
        package: &PackageEntry,
        info: &MalwareInfo,
        manifest_path: &str,
    ) -> Option<Annotation> {
        let (title, verdict, severity) = match info.kind {
            MalwareType::Malicious => (
                "Malicious Package",
                "malicious",
                AnnotationSeverity::Critical,
            ),
            MalwareType::Suspicious => {
                ("Suspicious Package", "suspicious", AnnotationSeverity::High)
            }
            MalwareType::Unknown => return None,
        };

        Some(Annotation {
            external_id: None,
            title: title.to_string(),
            annotation_type: AnnotationType::Bug,
            summary: format!(
                "Package {}@{} is {}",
                package.name(),
                package.version(),
                verdict
            ),
            severity,
            file_path: manifest_path.to_string(),
            link: Some(Self::malysis_link(&info.threat_id)),
        })
    }

    fn vulnerability_annotation(vuln: &Vulnerability, manifest_path: &str) -> Annotation {
        let severity = vuln
            .primary_risk()
            .map(AnnotationSeverity::from)
            .unwrap_or(AnnotationSeverity::Low);

        Annotation {
            external_id: Some(vuln.id.clone()),
            title: vuln.title.clone(),
            annotation_type: AnnotationType::Vulnerability,
            summary: vuln.title.clone(),
            severity,
            file_path: manifest_path.to_string(),
            link: None,
        }
    }

    fn violation_annotation(violation: &Violation, manifest_path: &str) -> Annotation {
        Annotation {
            external_id: None,
            title: violation.filter.summary.clone(),
            annotation_type: AnnotationType::CodeSmell,
            summary: violation.filter.description.clone(),
            severity: AnnotationSeverity::Medium,
            file_path: manifest_path.to_string(),
            link: None,
        }
    }

    fn threat_annotation(threat: &Threat, manifest_path: &str) -> Annotation {
        Annotation {
            external_id: None,
            title: "Threat Detected".to_string(),
            annotation_type: AnnotationType::Bug,
            summary: format!("Threat ID: {}", threat.id),
            severity: AnnotationSeverity::High,
            file_path: manifest_path.to_string(),
            link: None,
        }
    }
}
