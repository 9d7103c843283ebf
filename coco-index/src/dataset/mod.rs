//! Dataset types served to the training loop.

mod coco_;
mod dataset;
mod record;
mod usage;

pub use coco_::*;
pub use dataset::*;
pub use record::*;
pub use usage::*;
