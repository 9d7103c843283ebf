//! In-memory lookup tables over an annotation document.

use crate::{
    common::*,
    document::{Annotation, AnnotationId, CategoryId, CocoDocument, ImageId},
    error::ReferenceKind,
};

/// The parsed annotation document with id lookups.
///
/// Images, annotations and categories keep their document order. The dense
/// category index of a category is its position in the `categories` array, so
/// the mapping is fixed once the store is built.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    images: IndexMap<ImageId, PathBuf>,
    image_annotations: HashMap<ImageId, Vec<AnnotationId>>,
    annotations: IndexMap<AnnotationId, Annotation>,
    categories: IndexMap<CategoryId, String>,
}

impl AnnotationStore {
    /// Read and index the annotation file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("loading annotations from '{}'", path.display());
        Self::load(CocoDocument::open(path)?)
    }

    pub fn from_reader(reader: impl io::Read) -> Result<Self> {
        Self::load(CocoDocument::from_reader(reader)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::load(CocoDocument::from_json_str(text)?)
    }

    /// Index a parsed document.
    pub fn load(document: CocoDocument) -> Result<Self> {
        let CocoDocument {
            images,
            annotations,
            categories,
        } = document;

        let mut category_map = IndexMap::with_capacity(categories.len());
        for category in categories {
            if category_map.insert(category.id, category.name).is_some() {
                return Err(Error::MalformedDocument(format!(
                    "duplicated category id {}",
                    category.id
                )));
            }
        }

        let mut image_map = IndexMap::with_capacity(images.len());
        for image in images {
            if image_map.insert(image.id, image.relative_path()).is_some() {
                return Err(Error::MalformedDocument(format!(
                    "duplicated image id {}",
                    image.id
                )));
            }
        }

        let mut annotation_map = IndexMap::with_capacity(annotations.len());
        for ann in annotations {
            if !image_map.contains_key(&ann.image_id) {
                return Err(Error::DanglingReference {
                    annotation_id: ann.id,
                    kind: ReferenceKind::Image,
                    id: ann.image_id,
                });
            }
            if !category_map.contains_key(&ann.category_id) {
                return Err(Error::DanglingReference {
                    annotation_id: ann.id,
                    kind: ReferenceKind::Category,
                    id: ann.category_id,
                });
            }
            let id = ann.id;
            if annotation_map.insert(id, ann).is_some() {
                return Err(Error::MalformedDocument(format!(
                    "duplicated annotation id {}",
                    id
                )));
            }
        }

        let image_annotations: HashMap<_, _> = annotation_map
            .values()
            .map(|ann| (ann.image_id, ann.id))
            .into_group_map();

        // sanity check
        {
            let referenced: HashSet<_> = annotation_map
                .values()
                .map(|ann| ann.category_id)
                .collect();
            let unused: Vec<_> = category_map
                .iter()
                .filter(|(id, _)| !referenced.contains(*id))
                .map(|(_, name)| name)
                .collect();
            if !unused.is_empty() {
                warn!("these categories have no annotations: {:?}", unused);
            }
        }

        info!(
            "indexed {} images, {} annotations and {} categories",
            image_map.len(),
            annotation_map.len(),
            category_map.len()
        );

        Ok(Self {
            images: image_map,
            image_annotations,
            annotations: annotation_map,
            categories: category_map,
        })
    }

    /// Every image id in document order.
    pub fn image_ids(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.images.keys().copied()
    }

    pub fn relative_path(&self, image_id: ImageId) -> Result<&Path> {
        self.images
            .get(&image_id)
            .map(PathBuf::as_path)
            .ok_or(Error::UnknownImage(image_id))
    }

    /// Annotation ids of an image in document order. Images without any
    /// annotation yield an empty slice.
    pub fn annotation_ids_for_image(&self, image_id: ImageId) -> &[AnnotationId] {
        self.image_annotations
            .get(&image_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn annotation(&self, annotation_id: AnnotationId) -> Result<&Annotation> {
        self.annotations
            .get(&annotation_id)
            .ok_or(Error::UnknownAnnotation(annotation_id))
    }

    /// Map a sparse category id to its class index in `0..num_categories()`.
    pub fn dense_category_index(&self, category_id: CategoryId) -> Result<usize> {
        self.categories
            .get_index_of(&category_id)
            .ok_or(Error::UnknownCategory(category_id))
    }

    pub fn category_name(&self, dense_index: usize) -> Option<&str> {
        self.categories
            .get_index(dense_index)
            .map(|(_, name)| name.as_str())
    }

    /// Category ids ordered by dense index.
    pub fn category_ids(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.categories.keys().copied()
    }

    /// Category names ordered by dense index.
    pub fn class_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.values().map(String::as_str)
    }

    pub fn num_images(&self) -> usize {
        self.images.len()
    }

    pub fn num_annotations(&self) -> usize {
        self.annotations.len()
    }

    pub fn num_categories(&self) -> usize {
        self.categories.len()
    }
}
