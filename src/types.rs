use serde::Serialize;

/// One row of the ground-truth table: a single bounding box together with
/// the image it belongs to.
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundingBoxRecord {
    /// Source image file name (not a full path)
    pub filename: String,
    /// Full image width in pixels
    pub width: u32,
    /// Full image height in pixels
    pub height: u32,
    /// Category label of the annotated object
    pub class: String,
    pub xmin: i64,
    pub ymin: i64,
    pub xmax: i64,
    pub ymax: i64,
}
