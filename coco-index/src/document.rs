//! Serde model of the COCO instances annotation file.
//!
//! Only the members needed for detection labels are modeled. Other members such
//! as `info`, `licenses`, `segmentation` and `iscrowd` are accepted and ignored.

use crate::common::*;

pub type ImageId = u64;
pub type AnnotationId = u64;
pub type CategoryId = u64;

/// The top level annotation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoDocument {
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coco_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    pub image_id: ImageId,
    pub category_id: CategoryId,
    /// Box in `[x, y, width, height]` pixel units.
    pub bbox: [f64; 4],
    /// Precomputed segmentation area. It can be zero or negative for degenerate polygons.
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supercategory: Option<String>,
}

impl CocoDocument {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_reader(io::BufReader::new(file))
    }

    pub fn from_reader(reader: impl io::Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|err| Error::MalformedDocument(err.to_string()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| Error::MalformedDocument(err.to_string()))
    }
}

impl Image {
    /// The image path relative to the dataset root.
    ///
    /// The archive stores images under `<split>/<file_name>`, which is the tail of
    /// `coco_url`. Documents without a URL fall back to the bare file name.
    pub fn relative_path(&self) -> PathBuf {
        let from_url = self.coco_url.as_deref().and_then(|url| {
            let mut segments = url.rsplit('/');
            let file = segments.next().filter(|seg| !seg.is_empty())?;
            let dir = segments.next().filter(|seg| !seg.is_empty())?;
            Some(Path::new(dir).join(file))
        });
        from_url.unwrap_or_else(|| PathBuf::from(&self.file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_from_coco_url() {
        let image = Image {
            id: 397133,
            file_name: "000000397133.jpg".into(),
            coco_url: Some("http://images.cocodataset.org/val2017/000000397133.jpg".into()),
            width: Some(640),
            height: Some(427),
        };
        assert_eq!(
            image.relative_path(),
            Path::new("val2017").join("000000397133.jpg")
        );
    }

    #[test]
    fn relative_path_without_url() {
        let image = Image {
            id: 1,
            file_name: "a.jpg".into(),
            coco_url: None,
            width: None,
            height: None,
        };
        assert_eq!(image.relative_path(), PathBuf::from("a.jpg"));
    }

    #[test]
    fn ignores_unmodeled_members() -> Result<()> {
        let text = r#"{
            "info": {"year": 2017},
            "licenses": [],
            "images": [{"id": 1, "file_name": "a.jpg", "license": 3}],
            "annotations": [{
                "id": 5, "image_id": 1, "category_id": 2,
                "bbox": [1.5, 2, 3, 4], "area": 12.0,
                "iscrowd": 0, "segmentation": [[1, 2, 3, 4]]
            }],
            "categories": [{"id": 2, "name": "bicycle", "supercategory": "vehicle"}]
        }"#;
        let doc = CocoDocument::from_json_str(text)?;
        assert_eq!(doc.annotations[0].bbox, [1.5, 2.0, 3.0, 4.0]);
        assert_eq!(doc.categories[0].supercategory.as_deref(), Some("vehicle"));
        Ok(())
    }

    #[test]
    fn missing_categories_is_malformed() {
        let text = r#"{"images": [], "annotations": []}"#;
        let result = CocoDocument::from_json_str(text);
        assert!(matches!(result, Err(Error::MalformedDocument(_))));
    }

    #[test]
    fn short_bbox_is_malformed() {
        let text = r#"{
            "images": [{"id": 1, "file_name": "a.jpg"}],
            "annotations": [{"id": 1, "image_id": 1, "category_id": 1, "bbox": [0, 0, 5], "area": 1}],
            "categories": [{"id": 1, "name": "cat"}]
        }"#;
        let result = CocoDocument::from_json_str(text);
        assert!(matches!(result, Err(Error::MalformedDocument(_))));
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("coco-index-no-such-file.json");
        let result = CocoDocument::open(&path);
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
