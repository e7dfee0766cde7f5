use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failures a conversion run can end with. All of them are fatal: they
/// propagate to the binary entry point and terminate the run without
/// producing output.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path's extension is neither `.xml` nor `.json`.
    #[error("unsupported input format `{extension}`, expected .xml or .json")]
    UnsupportedFormat { extension: String },

    /// The input could not be parsed per its format's syntax, or a JSON
    /// document lacks the top-level image/annotation lists.
    #[error("failed to parse {}: {message}", .path.display())]
    MalformedDocument { path: PathBuf, message: String },

    /// An XML document parsed but an expected element is absent.
    #[error("{}: missing expected element `{element}`", .path.display())]
    StructuralMismatch { path: PathBuf, element: String },

    /// A JSON image or annotation entry lacks a required attribute.
    #[error("{}: missing required field `{field}`", .path.display())]
    MissingField { path: PathBuf, field: String },

    #[error("i/o failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: csv::Error },
}
