use crate::ReportError;
use image::{DynamicImage, ImageFormat};

/// A decoded raster image, such as a report logo. Images are stored once in the
/// [Document](crate::Document) and referred to from pages by id.
pub struct Image {
    pub image: DynamicImage,
    pub format: ImageFormat,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Image {
    /// Decode an in-memory image, guessing its format from the data
    pub fn from_bytes(data: &[u8]) -> Result<Image, ReportError> {
        let format = image::guess_format(data)?;
        Self::decode(data, format)
    }

    fn decode(data: &[u8], format: ImageFormat) -> Result<Image, ReportError> {
        let image = image::load_from_memory_with_format(data, format)?;
        Ok(Image {
            width: image.width(),
            height: image.height(),
            image,
            format,
        })
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
