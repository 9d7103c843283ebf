use crate::common::*;

/// The partition of the corpus to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    Train,
    Test,
    Validation,
}

impl Usage {
    /// The annotation file name under `<root>/annotations`.
    pub fn annotation_file(&self) -> Result<&'static str> {
        match self {
            Self::Train => Ok("instances_train2017.json"),
            Self::Test => Ok("instances_val2017.json"),
            Self::Validation => Err(Error::UnsupportedUsage(*self)),
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Train => "train",
            Self::Test => "test",
            Self::Validation => "validation",
        };
        write!(f, "{}", text)
    }
}

/// How image pixels are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFlag {
    Color,
    Grayscale,
}

impl ImageFlag {
    pub fn channels(&self) -> usize {
        match self {
            Self::Color => 3,
            Self::Grayscale => 1,
        }
    }
}

impl Default for ImageFlag {
    fn default() -> Self {
        Self::Color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_files() {
        assert_eq!(
            Usage::Train.annotation_file().unwrap(),
            "instances_train2017.json"
        );
        assert_eq!(
            Usage::Test.annotation_file().unwrap(),
            "instances_val2017.json"
        );
        assert!(matches!(
            Usage::Validation.annotation_file(),
            Err(Error::UnsupportedUsage(Usage::Validation))
        ));
    }

    #[test]
    fn usage_serde() {
        let usage: Usage = serde_json::from_str(r#""validation""#).unwrap();
        assert_eq!(usage, Usage::Validation);
        assert_eq!(usage.to_string(), "validation");
        assert_eq!(serde_json::to_string(&Usage::Test).unwrap(), r#""test""#);
    }

    #[test]
    fn flag_channels() {
        assert_eq!(ImageFlag::default(), ImageFlag::Color);
        assert_eq!(ImageFlag::Color.channels(), 3);
        assert_eq!(ImageFlag::Grayscale.channels(), 1);
    }
}
