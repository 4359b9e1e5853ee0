//! Code Insights derivation: the pure layer turning a vet scan report into
//! a summary report and per-finding annotations.
pub mod domain;
pub mod policies;
pub mod services;
