use std::path::Path;

use crate::coco;
use crate::error::{ConvertError, Result};
use crate::io::write_csv;
use crate::types::BoundingBoxRecord;
use crate::voc;

/// Supported input annotation formats, keyed by file extension.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputFormat {
    /// Per-image Pascal VOC XML document
    Voc,
    /// COCO-style JSON annotation index
    Coco,
}

impl InputFormat {
    /// Select the format from the path's extension alone. The match is
    /// case-sensitive and the file content is never inspected.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        match extension {
            "xml" => Ok(InputFormat::Voc),
            "json" => Ok(InputFormat::Coco),
            other => Err(ConvertError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }
}

/// Parse the annotation file at `input` into the flat record list.
pub fn convert(input: &Path) -> Result<Vec<BoundingBoxRecord>> {
    match InputFormat::from_path(input)? {
        InputFormat::Voc => voc::extract_records(input),
        InputFormat::Coco => coco::extract_records(input),
    }
}

/// Run the full pipeline: parse `input` and write the table to `output`.
///
/// Returns the number of rows written. The output file is not created until
/// the whole input document has been parsed, so a failed conversion leaves
/// no partial table behind.
pub fn convert_to_csv(input: &Path, output: &Path) -> Result<usize> {
    let records = convert(input)?;
    write_csv(&records, output)?;
    Ok(records.len())
}
