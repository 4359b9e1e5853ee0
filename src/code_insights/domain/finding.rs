use super::scan_report::{MalwareInfo, MalwareType, PackageEntry, Threat, Violation, Vulnerability};

/// Finding - a single security-relevant item attached to a package
///
/// This is the closed set of finding categories. Aggregation and annotation
/// both match on it exhaustively, so a new category has to be handled
/// everywhere before the crate compiles again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Finding<'a> {
    Malware(&'a MalwareInfo),
    Vulnerability(&'a Vulnerability),
    Violation(&'a Violation),
    Threat(&'a Threat),
}

impl PackageEntry {
    /// Iterates the package's findings in annotation order:
    /// malware, vulnerabilities, violations, then threats.
    /// Within a category the input order is kept.
    pub fn findings(&self) -> impl Iterator<Item = Finding<'_>> {
        self.malware_info
            .iter()
            .map(Finding::Malware)
            .chain(self.vulnerabilities.iter().map(Finding::Vulnerability))
            .chain(self.violations.iter().map(Finding::Violation))
            .chain(self.threats.iter().map(Finding::Threat))
    }
}

/// Per-category finding counts across a whole scan report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindingTally {
    pub vulnerabilities: usize,
    pub violations: usize,
    pub threats: usize,
    pub malicious: usize,
    pub suspicious: usize,
}

impl FindingTally {
    /// Counts one finding. Malware of an unrecognised type is not counted.
    pub fn record(&mut self, finding: Finding<'_>) {
        match finding {
            Finding::Malware(info) => match info.kind {
                MalwareType::Malicious => self.malicious += 1,
                MalwareType::Suspicious => self.suspicious += 1,
                MalwareType::Unknown => {}
            },
            Finding::Vulnerability(_) => self.vulnerabilities += 1,
            Finding::Violation(_) => self.violations += 1,
            Finding::Threat(_) => self.threats += 1,
        }
    }
}

impl<'a> FromIterator<Finding<'a>> for FindingTally {
    fn from_iter<I: IntoIterator<Item = Finding<'a>>>(iter: I) -> Self {
        let mut tally = Self::default();
        for finding in iter {
            tally.record(finding);
        }
        tally
    }
}
