// delimited-file plumbing around the matcher: two-column loader + results exporter

pub mod export;
pub mod loader;

pub use export::{export_records, write_records, ExportError};
pub use loader::{load_columns, LoadError, LoadedColumns};
