/// ProgressReporter port for reporting what the tool is doing
///
/// Messages go to a side channel (stderr for the CLI) so that artifacts
/// written to stdout stay machine-readable.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
