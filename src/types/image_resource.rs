use std::path::{ Path, PathBuf };
use crate::types::{ Error, Result };

/// A decoded raster image, stored as zlib-compressed 8-bit RGB ready for a `FlateDecode` XObject
#[derive(Debug,Clone,PartialEq)]
pub struct ImageResource {
    pub path: PathBuf,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub data: Vec<u8>,
}

impl ImageResource {
    /// reads and decodes a JPEG or PNG file; alpha is dropped
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|err| Error::reading(path, err))?;
        let rgb = image::load_from_memory(&bytes)?.to_rgb8();
        let (pixel_width, pixel_height) = rgb.dimensions();
        let data = miniz_oxide::deflate::compress_to_vec_zlib(rgb.as_raw(), 6);

        Ok(ImageResource {
            path: path.to_path_buf(),
            pixel_width,
            pixel_height,
            data,
        })
    }

    /// display height keeping the aspect ratio
    pub fn height_for(&self, width: f32) -> f32 {
        if self.pixel_width == 0 {
            return 0.0;
        }

        width * self.pixel_height as f32 / self.pixel_width as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        image::RgbImage::new(40, 10).save(&path).unwrap();

        let resource = ImageResource::load(&path).unwrap();

        assert_eq!((resource.pixel_width, resource.pixel_height), (40, 10));
        assert_eq!(resource.height_for(100.0), 25.0);
        assert!(!resource.data.is_empty());
    }

    #[test]
    fn missing_file_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.jpg");

        assert!(matches!(ImageResource::load(&path), Err(Error::ResourceNotFound(p)) if p == path));
    }

    #[test]
    fn garbage_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.jpg");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(matches!(ImageResource::load(&path), Err(Error::Image(_))));
    }
}
