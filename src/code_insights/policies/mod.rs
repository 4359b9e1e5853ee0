mod verdict_policy;

pub use verdict_policy::{SuspiciousPolicy, VerdictPolicy};
