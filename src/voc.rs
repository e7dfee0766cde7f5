//! Pascal VOC XML extraction
//!
//! One document describes one image: a `filename`, a `size` element carrying
//! the image dimensions, and zero or more `object` elements whose `bndbox`
//! already stores corner coordinates.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::types::BoundingBoxRecord;

// Leaf fields are optional so that a syntactically valid document with
// missing elements surfaces as StructuralMismatch, not as a parse error.
#[derive(Debug, Deserialize)]
struct VocAnnotation {
    filename: Option<String>,
    size: Option<VocSize>,
    #[serde(default)]
    object: Vec<VocObject>,
}

#[derive(Debug, Deserialize)]
struct VocSize {
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct VocObject {
    name: Option<String>,
    bndbox: Option<VocBndBox>,
}

#[derive(Debug, Deserialize)]
struct VocBndBox {
    xmin: Option<f64>,
    ymin: Option<f64>,
    xmax: Option<f64>,
    ymax: Option<f64>,
}

/// Extract one record per `object` element of the document at `path`.
///
/// All records share the document-level filename and image size. Numeric
/// element text is truncated toward zero, so `99.7` becomes `99`.
pub fn extract_records(path: &Path) -> Result<Vec<BoundingBoxRecord>> {
    let content = fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document: VocAnnotation =
        serde_xml_rs::from_str(&content).map_err(|e| ConvertError::MalformedDocument {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mismatch = |element: &str| ConvertError::StructuralMismatch {
        path: path.to_path_buf(),
        element: element.to_string(),
    };

    let filename = document.filename.ok_or_else(|| mismatch("filename"))?;
    let size = document.size.ok_or_else(|| mismatch("size"))?;
    let width = size.width.ok_or_else(|| mismatch("size/width"))?.trunc() as u32;
    let height = size.height.ok_or_else(|| mismatch("size/height"))?.trunc() as u32;

    let mut records = Vec::with_capacity(document.object.len());
    for object in document.object {
        let class = object.name.ok_or_else(|| mismatch("object/name"))?;
        let bndbox = object.bndbox.ok_or_else(|| mismatch("object/bndbox"))?;
        let xmin = bndbox.xmin.ok_or_else(|| mismatch("bndbox/xmin"))?;
        let ymin = bndbox.ymin.ok_or_else(|| mismatch("bndbox/ymin"))?;
        let xmax = bndbox.xmax.ok_or_else(|| mismatch("bndbox/xmax"))?;
        let ymax = bndbox.ymax.ok_or_else(|| mismatch("bndbox/ymax"))?;

        records.push(BoundingBoxRecord {
            filename: filename.clone(),
            width,
            height,
            class,
            xmin: xmin.trunc() as i64,
            ymin: ymin.trunc() as i64,
            xmax: xmax.trunc() as i64,
            ymax: ymax.trunc() as i64,
        });
    }

    Ok(records)
}
