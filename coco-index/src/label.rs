//! Label vectors and their extraction from annotations.

use crate::{common::*, document::ImageId, store::AnnotationStore};

/// A box in pixel units with its dense class index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CocoLabel {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub class: usize,
}

impl CocoLabel {
    /// The `[x, y, width, height, class]` row of a label matrix.
    pub fn to_row(&self) -> [f64; 5] {
        let Self {
            x,
            y,
            width,
            height,
            class,
        } = *self;
        [x, y, width, height, class as f64]
    }

    pub fn bbox(&self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

/// Turns the annotations of an image into labels.
pub trait LabelExtractor {
    fn labels_for_image(&self, store: &AnnotationStore, image_id: ImageId)
        -> Result<Vec<CocoLabel>>;
}

/// Keeps annotations with a positive area and drops the rest.
///
/// Zero and negative areas are treated alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveArea;

impl LabelExtractor for PositiveArea {
    fn labels_for_image(
        &self,
        store: &AnnotationStore,
        image_id: ImageId,
    ) -> Result<Vec<CocoLabel>> {
        let mut labels = vec![];

        for &annotation_id in store.annotation_ids_for_image(image_id) {
            let ann = store.annotation(annotation_id)?;
            if ann.area <= 0.0 {
                continue;
            }

            let [x, y, width, height] = ann.bbox;
            let class = store.dense_category_index(ann.category_id)?;
            labels.push(CocoLabel {
                x,
                y,
                width,
                height,
                class,
            });
        }

        Ok(labels)
    }
}
