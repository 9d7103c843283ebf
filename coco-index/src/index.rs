use crate::{
    common::*,
    dataset::FileRecord,
    label::LabelExtractor,
    store::AnnotationStore,
};

/// The ordered list of labeled images.
///
/// The position of a record is the public index of the dataset. Images whose
/// label set comes out empty are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetIndex {
    records: Vec<FileRecord>,
}

impl DatasetIndex {
    /// Walk the images of `store` in document order and keep the labeled ones.
    ///
    /// Image paths are joined onto `root`. No file is touched.
    pub fn build<E>(store: &AnnotationStore, extractor: &E, root: &Path) -> Result<Self>
    where
        E: LabelExtractor + ?Sized,
    {
        let mut records = vec![];
        let mut num_dropped = 0;

        for image_id in store.image_ids() {
            let labels = extractor.labels_for_image(store, image_id)?;
            num_dropped += store
                .annotation_ids_for_image(image_id)
                .len()
                .saturating_sub(labels.len());

            if labels.is_empty() {
                continue;
            }

            records.push(FileRecord {
                path: root.join(store.relative_path(image_id)?),
                labels,
            });
        }

        debug!("dropped {} annotations without positive area", num_dropped);
        info!(
            "{} out of {} images have labels",
            records.len(),
            store.num_images()
        );

        Ok(Self { records })
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&FileRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{CocoLabel, PositiveArea};

    #[test]
    fn drops_images_without_labels() -> Result<()> {
        let store = AnnotationStore::from_json_str(
            r#"{
                "images": [
                    {"id": 4, "file_name": "4.jpg"},
                    {"id": 1, "file_name": "1.jpg"},
                    {"id": 2, "file_name": "2.jpg"},
                    {"id": 3, "file_name": "3.jpg"}
                ],
                "annotations": [
                    {"id": 1, "image_id": 1, "category_id": 10, "bbox": [0, 0, 5, 5], "area": 25},
                    {"id": 2, "image_id": 2, "category_id": 10, "bbox": [1, 1, 1, 1], "area": 0},
                    {"id": 3, "image_id": 4, "category_id": 20, "bbox": [2, 2, 2, 2], "area": 4}
                ],
                "categories": [{"id": 10, "name": "cat"}, {"id": 20, "name": "dog"}]
            }"#,
        )?;
        let root = Path::new("/data/coco");
        let index = DatasetIndex::build(&store, &PositiveArea, root)?;

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.records(),
            &[
                FileRecord {
                    path: root.join("4.jpg"),
                    labels: vec![CocoLabel {
                        x: 2.0,
                        y: 2.0,
                        width: 2.0,
                        height: 2.0,
                        class: 1,
                    }],
                },
                FileRecord {
                    path: root.join("1.jpg"),
                    labels: vec![CocoLabel {
                        x: 0.0,
                        y: 0.0,
                        width: 5.0,
                        height: 5.0,
                        class: 0,
                    }],
                },
            ]
        );
        assert!(index.get(2).is_none());
        Ok(())
    }

    #[test]
    fn empty_document() -> Result<()> {
        let store = AnnotationStore::from_json_str(
            r#"{"images": [], "annotations": [], "categories": []}"#,
        )?;
        let index = DatasetIndex::build(&store, &PositiveArea, Path::new("."))?;
        assert!(index.is_empty());
        Ok(())
    }
}
