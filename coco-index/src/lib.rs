//! Random access index over COCO object detection annotations.
//!
//! The annotation document is parsed once into an [AnnotationStore](store::AnnotationStore),
//! turned into an immutable [DatasetIndex](index::DatasetIndex) of images that carry at
//! least one positive-area box, and served by [CocoDetection](dataset::CocoDetection).

mod common;
pub mod dataset;
pub mod decode;
pub mod document;
pub mod error;
pub mod index;
pub mod label;
pub mod repository;
pub mod store;

pub use dataset::{
    CocoDetection, CocoDetectionInit, DataRecord, FileRecord, GenericDataset, ImageFlag,
    RandomAccessDataset, Usage,
};
pub use decode::{ImageCrateDecoder, ImageDecoder, ImageHandle};
pub use document::{AnnotationId, CategoryId, ImageId};
pub use error::{Error, ReferenceKind, Result};
pub use index::DatasetIndex;
pub use label::{CocoLabel, LabelExtractor, PositiveArea};
pub use repository::{Artifact, LocalRepository, Repository};
pub use store::AnnotationStore;
