//! Local artifact repository.

use crate::common::*;

/// Names a dataset artifact inside a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(default = "default_artifact_name")]
    pub name: String,
    #[serde(default = "default_artifact_version")]
    pub version: String,
}

impl Default for Artifact {
    fn default() -> Self {
        Self {
            name: default_artifact_name(),
            version: default_artifact_version(),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

fn default_artifact_name() -> String {
    "coco".into()
}

fn default_artifact_version() -> String {
    "1.0".into()
}

/// Where extracted dataset artifacts live.
///
/// Downloading and extracting archives is up to the implementor.
pub trait Repository
where
    Self: Debug + Send + Sync,
{
    fn cache_dir(&self) -> &Path;

    /// The root directory of an extracted artifact.
    fn resolve(&self, artifact: &Artifact) -> Result<PathBuf>;
}

/// A repository whose artifacts are already extracted at
/// `<cache_dir>/<name>/<version>`.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    cache_dir: PathBuf,
}

impl LocalRepository {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }
}

impl Repository for LocalRepository {
    fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn resolve(&self, artifact: &Artifact) -> Result<PathBuf> {
        let dir = self.cache_dir.join(&artifact.name).join(&artifact.version);
        if !dir.is_dir() {
            return Err(Error::Repository {
                artifact: artifact.to_string(),
                reason: format!("'{}' is not a directory", dir.display()),
            });
        }
        Ok(dir)
    }
}
