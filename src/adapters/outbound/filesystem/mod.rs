/// Filesystem adapters for loading the scan report and writing artifacts
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutWriter};
