//! Image handles and pixel decoding.

use crate::{common::*, dataset::ImageFlag};
use image::DynamicImage;

/// A reference to an image file that has not been decoded yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub path: PathBuf,
    pub flag: ImageFlag,
}

/// Turns an [ImageHandle] into pixels.
pub trait ImageDecoder
where
    Self: Debug + Send + Sync,
{
    fn decode(&self, handle: &ImageHandle) -> Result<DynamicImage>;
}

/// Decodes files with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, handle: &ImageHandle) -> Result<DynamicImage> {
        let ImageHandle { ref path, flag } = *handle;
        let image = image::open(path).map_err(|source| Error::Image {
            path: path.clone(),
            source,
        })?;

        let image = match flag {
            ImageFlag::Color => DynamicImage::ImageRgb8(image.to_rgb8()),
            ImageFlag::Grayscale => DynamicImage::ImageLuma8(image.to_luma8()),
        };
        Ok(image)
    }
}
