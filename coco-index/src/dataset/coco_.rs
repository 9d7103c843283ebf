use super::*;
use crate::{
    common::*,
    decode::ImageHandle,
    document::CategoryId,
    index::DatasetIndex,
    label::PositiveArea,
    repository::{Artifact, Repository},
    store::AnnotationStore,
};

/// Options of the [CocoDetection] dataset.
#[derive(Debug, Clone)]
pub struct CocoDetectionInit {
    pub usage: Usage,
    pub flag: ImageFlag,
    pub artifact: Artifact,
    /// If set, the dataset root is taken as is instead of being resolved by the repository.
    pub root: Option<PathBuf>,
    pub repository: Arc<dyn Repository>,
}

impl CocoDetectionInit {
    pub fn new(usage: Usage, repository: Arc<dyn Repository>) -> Self {
        Self {
            usage,
            flag: ImageFlag::default(),
            artifact: Artifact::default(),
            root: None,
            repository,
        }
    }

    pub fn build(self) -> CocoDetection {
        CocoDetection {
            init: self,
            state: State::Unprepared,
        }
    }
}

/// The Microsoft COCO detection dataset.
///
/// The dataset starts unprepared. [prepare](CocoDetection::prepare) loads the
/// annotation file of the configured usage and builds the index in one go.
/// After that the dataset is read-only and can be shared across threads.
#[derive(Debug)]
pub struct CocoDetection {
    init: CocoDetectionInit,
    state: State,
}

#[derive(Debug)]
enum State {
    Unprepared,
    Prepared(Prepared),
}

#[derive(Debug)]
struct Prepared {
    root: PathBuf,
    category_ids: Vec<CategoryId>,
    classes: Vec<String>,
    index: DatasetIndex,
}

impl CocoDetection {
    /// Load annotations and build the record index.
    ///
    /// On failure the dataset stays unprepared. Preparing a prepared dataset
    /// does nothing.
    pub fn prepare(&mut self) -> Result<()> {
        if let State::Prepared(_) = self.state {
            debug!("dataset for usage '{}' is already prepared", self.init.usage);
            return Ok(());
        }

        let CocoDetectionInit {
            usage,
            ref artifact,
            ref root,
            ref repository,
            ..
        } = self.init;

        let annotation_file = usage.annotation_file()?;
        let root = match root {
            Some(root) => root.clone(),
            None => repository.resolve(artifact)?,
        };
        let store = AnnotationStore::open(root.join("annotations").join(annotation_file))?;
        let index = DatasetIndex::build(&store, &PositiveArea, &root)?;

        self.state = State::Prepared(Prepared {
            category_ids: store.category_ids().collect(),
            classes: store.class_names().map(ToOwned::to_owned).collect(),
            root,
            index,
        });
        Ok(())
    }

    pub fn is_prepared(&self) -> bool {
        matches!(self.state, State::Prepared(_))
    }

    pub fn usage(&self) -> Usage {
        self.init.usage
    }

    pub fn flag(&self) -> ImageFlag {
        self.init.flag
    }

    pub fn size(&self) -> Result<usize> {
        Ok(self.prepared()?.index.len())
    }

    /// Get the record at `index`.
    pub fn get(&self, index: i64) -> Result<DataRecord> {
        let prepared = self.prepared()?;
        let size = prepared.index.len();
        let record = usize::try_from(index)
            .ok()
            .and_then(|index| prepared.index.get(index))
            .ok_or(Error::IndexOutOfRange { index, size })?;

        Ok(DataRecord {
            image: ImageHandle {
                path: record.path.clone(),
                flag: self.init.flag,
            },
            labels: record.labels.clone(),
        })
    }

    /// The dataset root that image paths are joined onto.
    pub fn root(&self) -> Result<&Path> {
        Ok(&self.prepared()?.root)
    }

    pub fn records(&self) -> Result<&[FileRecord]> {
        Ok(self.prepared()?.index.records())
    }

    /// Source category ids ordered by class index.
    pub fn category_ids(&self) -> Result<&[CategoryId]> {
        Ok(&self.prepared()?.category_ids)
    }

    fn prepared(&self) -> Result<&Prepared> {
        match &self.state {
            State::Prepared(prepared) => Ok(prepared),
            State::Unprepared => Err(Error::NotPrepared),
        }
    }
}

impl GenericDataset for CocoDetection {
    fn input_channels(&self) -> usize {
        self.init.flag.channels()
    }

    fn classes(&self) -> &[String] {
        match &self.state {
            State::Prepared(prepared) => &prepared.classes,
            State::Unprepared => &[],
        }
    }
}

impl RandomAccessDataset for CocoDetection {
    fn num_records(&self) -> Result<usize> {
        self.size()
    }

    fn nth(&self, index: usize) -> Result<DataRecord> {
        self.get(i64::try_from(index).unwrap_or(i64::MAX))
    }
}
