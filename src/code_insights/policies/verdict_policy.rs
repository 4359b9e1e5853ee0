use crate::code_insights::domain::{FindingTally, ReportResult};

/// How suspicious malware findings weigh on the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspiciousPolicy {
    /// Suspicious packages are reported but never fail the scan
    Informational,
    /// Suspicious packages fail the scan like malicious ones
    Blocking,
}

/// VerdictPolicy decides whether a scan passes
///
/// Vulnerabilities, violations, threats and malicious packages always fail
/// the scan. Whether suspicious packages do is governed by
/// [`SuspiciousPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictPolicy {
    suspicious: SuspiciousPolicy,
}

impl VerdictPolicy {
    /// Suspicious-only scans pass, with a recommendation for human review.
    pub const DEFAULT: VerdictPolicy = VerdictPolicy::new(SuspiciousPolicy::Informational);

    pub const fn new(suspicious: SuspiciousPolicy) -> Self {
        Self { suspicious }
    }

    pub fn from_fail_on_suspicious(fail_on_suspicious: bool) -> Self {
        if fail_on_suspicious {
            Self::new(SuspiciousPolicy::Blocking)
        } else {
            Self::DEFAULT
        }
    }

    pub fn suspicious_policy(&self) -> SuspiciousPolicy {
        self.suspicious
    }

    /// Number of findings in the tally that count against the verdict
    pub fn blocking_findings(&self, tally: &FindingTally) -> usize {
        let always_blocking =
            tally.vulnerabilities + tally.violations + tally.threats + tally.malicious;

        match self.suspicious {
            SuspiciousPolicy::Informational => always_blocking,
            SuspiciousPolicy::Blocking => always_blocking + tally.suspicious,
        }
    }

    pub fn verdict(&self, tally: &FindingTally) -> ReportResult {
        if self.blocking_findings(tally) > 0 {
            ReportResult::Failed
        } else {
            ReportResult::Passed
        }
    }
}

impl Default for VerdictPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
