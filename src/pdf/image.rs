use crate::canvas::ImageInfo;
use crate::GridError;
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Resolution assumed for images that don't say otherwise
pub const DEFAULT_RESOLUTION: f32 = 72.0;

/// A decoded raster image, ready to be placed on a
/// [`PdfCanvas`](super::PdfCanvas).
///
/// The content stream refers to registered images as `/I{index}`; writing the
/// image XObjects is left to whoever assembles the document.
pub struct Image {
    pub image: DynamicImage,
    /// Pixels per inch, used to compute the size of the image in points
    pub resolution: f32,
}

impl Image {
    /// Load a raster image from disk. TGA files are recognised by their
    /// extension since they carry no magic number, every other format is
    /// guessed from the file contents.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Image, GridError> {
        let path = path.as_ref();
        let is_tga = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("tga"))
            .unwrap_or(false);

        let data = std::fs::read(path)?;
        let format = if is_tga {
            image::ImageFormat::Tga
        } else {
            image::guess_format(&data)?
        };

        let image = image::load_from_memory_with_format(&data, format)?;
        Ok(Image::from_dynamic(image))
    }

    /// Decode an image held in memory, guessing its format
    pub fn from_memory(data: &[u8]) -> Result<Image, GridError> {
        Ok(Image::from_dynamic(image::load_from_memory(data)?))
    }

    pub fn from_dynamic(image: DynamicImage) -> Image {
        Image {
            image,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Override the resolution, in pixels per inch
    pub fn with_resolution(mut self, resolution: f32) -> Image {
        self.resolution = resolution;
        self
    }

    pub fn info(&self) -> ImageInfo {
        let (pixel_width, pixel_height) = self.image.dimensions();
        ImageInfo {
            pixel_width,
            pixel_height,
            resolution: self.resolution,
        }
    }
}
