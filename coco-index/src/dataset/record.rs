use crate::{common::*, decode::ImageHandle, label::CocoLabel};

/// The record with image path and boxes, but without image pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Bounding box in pixel units.
    pub labels: Vec<CocoLabel>,
}

/// The record handed to consumers. Pixels are decoded on demand through the handle.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRecord {
    pub image: ImageHandle,
    pub labels: Vec<CocoLabel>,
}

impl DataRecord {
    /// The label matrix with one `[x, y, width, height, class]` row per box.
    pub fn label_rows(&self) -> Vec<[f64; 5]> {
        self.labels.iter().map(CocoLabel::to_row).collect()
    }
}
