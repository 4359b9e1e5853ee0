/// Formatter adapters for serializing Code Insights artifacts
mod json_formatter;

pub use json_formatter::JsonFormatter;
