//! COCO-style JSON extraction
//!
//! A single index document lists many images and their annotations. Boxes
//! arrive in (x, y, width, height) form and are converted to integer corner
//! coordinates here. Category labels are expected to be pre-resolved to text
//! in a `category_txt` field; this module never resolves numeric category
//! ids.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::types::BoundingBoxRecord;

#[derive(Debug, Deserialize)]
struct CocoIndex {
    images: Option<Vec<CocoImage>>,
    annotations: Option<Vec<CocoAnnotation>>,
}

#[derive(Debug, Deserialize)]
struct CocoImage {
    id: Option<i64>,
    file_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CocoAnnotation {
    id: Option<i64>,
    image_id: Option<i64>,
    bbox: Option<Vec<f64>>,
    category_txt: Option<String>,
}

/// Extract one record per annotation of the index at `path`.
///
/// Images are walked in document listing order; within an image, its
/// annotations keep their document order. Annotations referencing an image
/// id that is not listed are dropped.
pub fn extract_records(path: &Path) -> Result<Vec<BoundingBoxRecord>> {
    let file = File::open(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let index: CocoIndex =
        serde_json::from_reader(file).map_err(|e| ConvertError::MalformedDocument {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let malformed = |message: &str| ConvertError::MalformedDocument {
        path: path.to_path_buf(),
        message: message.to_string(),
    };
    let images = index
        .images
        .ok_or_else(|| malformed("missing top-level `images` list"))?;
    let annotations = index
        .annotations
        .ok_or_else(|| malformed("missing top-level `annotations` list"))?;

    let missing = |field: &str| ConvertError::MissingField {
        path: path.to_path_buf(),
        field: field.to_string(),
    };

    // Group annotations by image id; entry order within a group follows the
    // document's annotation listing order.
    let mut by_image: HashMap<i64, Vec<&CocoAnnotation>> = HashMap::new();
    for annotation in &annotations {
        annotation.id.ok_or_else(|| missing("id"))?;
        let image_id = annotation.image_id.ok_or_else(|| missing("image_id"))?;
        by_image.entry(image_id).or_default().push(annotation);
    }

    let mut records = Vec::with_capacity(annotations.len());
    for image in &images {
        let id = image.id.ok_or_else(|| missing("id"))?;
        let file_name = image.file_name.as_ref().ok_or_else(|| missing("file_name"))?;
        let width = image.width.ok_or_else(|| missing("width"))?;
        let height = image.height.ok_or_else(|| missing("height"))?;

        if let Some(group) = by_image.get(&id) {
            for annotation in group {
                let bbox = annotation.bbox.as_ref().ok_or_else(|| missing("bbox"))?;
                if bbox.len() < 4 {
                    return Err(missing("bbox"));
                }
                let class = annotation
                    .category_txt
                    .as_ref()
                    .ok_or_else(|| missing("category_txt"))?;

                let (xmin, ymin, xmax, ymax) = corner_coords(bbox[0], bbox[1], bbox[2], bbox[3]);
                records.push(BoundingBoxRecord {
                    filename: file_name.clone(),
                    width,
                    height,
                    class: class.clone(),
                    xmin,
                    ymin,
                    xmax,
                    ymax,
                });
            }
        }
    }

    Ok(records)
}

/// Convert an (x, y, width, height) box to integer corner coordinates.
///
/// Each corner is rounded independently. `f64::round` rounds half away from
/// zero, so a computed corner of 14.5 becomes 15.
pub fn corner_coords(x: f64, y: f64, w: f64, h: f64) -> (i64, i64, i64, i64) {
    (
        x.round() as i64,
        y.round() as i64,
        (x + w).round() as i64,
        (y + h).round() as i64,
    )
}
