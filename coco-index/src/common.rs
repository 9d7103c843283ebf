//! Common imports from external crates.

pub use crate::error::{Error, Result};
pub use indexmap::IndexMap;
pub use itertools::Itertools as _;
pub use log::{debug, info, warn};
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::{HashMap, HashSet},
    fmt,
    fmt::Debug,
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};
