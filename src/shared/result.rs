/// Result alias used at every fallible boundary (loading, config, writing).
/// The derivation layer itself is infallible and never returns it.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
