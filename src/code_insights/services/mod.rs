mod annotator;
mod report_aggregator;

pub use annotator::Annotator;
pub use report_aggregator::ReportAggregator;
