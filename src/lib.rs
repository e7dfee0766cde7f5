//! Annotation to CSV table converter
//!
//! This library converts object-detection ground-truth annotations, either a
//! per-image Pascal VOC XML document or a COCO-style JSON index, into a flat
//! comma-delimited table with one row per bounding box.

pub mod coco;
pub mod config;
pub mod conversion;
pub mod error;
pub mod io;
pub mod types;
pub mod voc;

// Re-export commonly used types and functions
pub use config::Args;
pub use conversion::{convert, convert_to_csv, InputFormat};
pub use error::{ConvertError, Result};
pub use io::write_csv;
pub use types::BoundingBoxRecord;
