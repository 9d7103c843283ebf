//! Tool configuration format.

use anyhow::Result;
use coco_index::{Artifact, CocoDetectionInit, ImageFlag, LocalRepository, Usage};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// The main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = std::fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

/// Dataset options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// The corpus partition to load.
    pub usage: Usage,
    /// The local repository cache directory.
    pub repository_dir: PathBuf,
    /// The artifact to resolve in the repository.
    #[serde(default)]
    pub artifact: Artifact,
    /// If set, it overrides the dataset root resolved from the repository.
    pub root: Option<PathBuf>,
    /// Image decoding mode.
    #[serde(default)]
    pub flag: ImageFlag,
}

impl DatasetConfig {
    pub fn to_init(&self) -> CocoDetectionInit {
        let Self {
            usage,
            ref repository_dir,
            ref artifact,
            ref root,
            flag,
        } = *self;

        CocoDetectionInit {
            usage,
            flag,
            artifact: artifact.clone(),
            root: root.clone(),
            repository: Arc::new(LocalRepository::new(repository_dir)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coco_index::Repository;

    #[test]
    fn example_config_test() -> Result<()> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("coco.json5");
        let config = Config::open(path)?;
        let init = config.dataset.to_init();
        assert_eq!(init.usage, Usage::Train);
        assert_eq!(init.flag, ImageFlag::Color);
        assert_eq!(init.artifact, Artifact::default());
        assert_eq!(init.root, None);
        assert_eq!(
            init.repository.cache_dir(),
            Path::new("/data/datasets")
        );
        Ok(())
    }

    #[test]
    fn defaults_test() -> Result<()> {
        let config: Config = json5::from_str(
            r#"{
                dataset: {
                    usage: "validation",
                    repository_dir: "cache",
                    root: "cache/coco/2.0",
                },
            }"#,
        )?;
        let DatasetConfig {
            usage,
            artifact,
            root,
            flag,
            ..
        } = config.dataset;
        assert_eq!(usage, Usage::Validation);
        assert_eq!(artifact, Artifact::default());
        assert_eq!(root, Some(PathBuf::from("cache/coco/2.0")));
        assert_eq!(flag, ImageFlag::Color);
        Ok(())
    }
}
