use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::types::BoundingBoxRecord;

/// Write the records to `output_path` as comma-delimited rows.
///
/// No header row is emitted; the downstream loader expects data rows only.
/// String fields are quoted only when their content requires it. Any
/// existing file at `output_path` is truncated, and an empty record list
/// produces an empty file.
pub fn write_csv(records: &[BoundingBoxRecord], output_path: &Path) -> Result<()> {
    let write_error = |source| ConvertError::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)
        .map_err(write_error)?;

    for record in records {
        writer.serialize(record).map_err(write_error)?;
    }

    writer.flush().map_err(|source| ConvertError::Io {
        path: output_path.to_path_buf(),
        source,
    })
}
