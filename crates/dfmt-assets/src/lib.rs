//! Asset helpers for the game project.
//!
//! Currently a single operation: resize a source image to fixed dimensions
//! and save it under a new path. The output format follows the target
//! extension, so this doubles as a format converter (e.g. `.tif` masters to
//! `.png` backgrounds).

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use thiserror::Error;
use tracing::info;

/// Errors from asset processing.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Failed to open or decode the source image.
    #[error("failed to open image {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write the target image.
    #[error("failed to save image {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Convenience result alias for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Target dimensions for a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSpec {
    pub width: u32,
    pub height: u32,
}

impl Default for ResizeSpec {
    /// Full-HD background size used by the menu wallpapers.
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Resizes the image at `src` to exactly `spec` and saves it at `dst`.
///
/// The aspect ratio is not preserved; the output is always exactly
/// `spec.width x spec.height`. The output format is chosen from the `dst`
/// extension.
pub fn resize_image(src: &Path, dst: &Path, spec: ResizeSpec) -> Result<()> {
    let img = image::open(src).map_err(|e| AssetError::Open {
        path: src.to_path_buf(),
        source: e,
    })?;

    let resized = img.resize_exact(spec.width, spec.height, FilterType::CatmullRom);

    resized.save(dst).map_err(|e| AssetError::Save {
        path: dst.to_path_buf(),
        source: e,
    })?;

    info!(
        src = %src.display(),
        dst = %dst.display(),
        width = spec.width,
        height = spec.height,
        "resized image"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbaImage};
    use tempfile::TempDir;

    fn write_test_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_resize_image_to_exact_dimensions() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.png");
        let dst = dir.path().join("dst.png");
        write_test_png(&src, 64, 48);

        resize_image(&src, &dst, ResizeSpec {
            width: 32,
            height: 16,
        })
        .unwrap();

        let out = image::open(&dst).unwrap();
        assert_eq!(out.dimensions(), (32, 16));
    }

    #[test]
    fn test_default_spec_is_full_hd() {
        let spec = ResizeSpec::default();
        assert_eq!((spec.width, spec.height), (1920, 1080));
    }

    #[test]
    fn test_resize_image_missing_source() {
        let dir = TempDir::new().unwrap();
        let result = resize_image(
            &dir.path().join("missing.png"),
            &dir.path().join("out.png"),
            ResizeSpec::default(),
        );
        assert!(matches!(result, Err(AssetError::Open { .. })));
    }
}
