//! Error types of the annotation index.

use crate::{
    dataset::Usage,
    document::{AnnotationId, CategoryId, ImageId},
};
use std::{fmt, io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Required members are missing, mistyped or inconsistent.
    #[error("malformed annotation document: {0}")]
    MalformedDocument(String),

    #[error("annotation {annotation_id} references unknown {kind} id {id}")]
    DanglingReference {
        annotation_id: AnnotationId,
        kind: ReferenceKind,
        id: u64,
    },

    #[error("unknown image id {0}")]
    UnknownImage(ImageId),

    #[error("unknown annotation id {0}")]
    UnknownAnnotation(AnnotationId),

    #[error("unknown category id {0}")]
    UnknownCategory(CategoryId),

    #[error("unsupported usage '{0}'")]
    UnsupportedUsage(Usage),

    #[error("the dataset is not prepared")]
    NotPrepared,

    #[error("index {index} is out of range for a dataset of size {size}")]
    IndexOutOfRange { index: i64, size: usize },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode image '{}'", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unable to resolve artifact '{artifact}': {reason}")]
    Repository { artifact: String, reason: String },
}

/// The entity an annotation points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Image,
    Category,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Category => write!(f, "category"),
        }
    }
}
