// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading.
//!
//! This module decodes image files into RGBA buffers for the render step.

use crate::error::{LabelerError, Result};
use crate::io::pairs::ImagePair;
use image::RgbaImage;
use std::path::Path;

/// Decode an image file into an RGBA buffer.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| LabelerError::ImageDecodeFailure {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img.to_rgba8())
}

/// Decoded pixels of the displayed pair. A side that failed to decode is
/// `None` and shows as a blank pane.
#[derive(Debug, Clone, Default)]
pub struct PairSources {
    pub left: Option<RgbaImage>,
    pub right: Option<RgbaImage>,
}

impl PairSources {
    /// Decode both images of a pair, logging failures instead of returning them.
    pub fn load(pair: &ImagePair) -> Self {
        Self {
            left: load_or_log(&pair.left),
            right: load_or_log(&pair.right),
        }
    }
}

fn load_or_log(path: &Path) -> Option<RgbaImage> {
    match load_image(path) {
        Ok(img) => Some(img),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_image_roundtrips_pixels() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dot.png");
        let mut img = RgbaImage::new(4, 3);
        img.put_pixel(1, 2, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.get_pixel(1, 2), &image::Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_undecodable_file_leaves_side_blank() {
        let tmp = tempfile::tempdir().unwrap();
        let good = tmp.path().join("good.png");
        let bad = tmp.path().join("bad.jpg");
        RgbaImage::new(2, 2).save(&good).unwrap();
        std::fs::write(&bad, b"not a jpeg").unwrap();

        assert!(matches!(
            load_image(&bad),
            Err(LabelerError::ImageDecodeFailure { .. })
        ));

        let sources = PairSources::load(&ImagePair {
            left: good,
            right: bad,
        });
        assert!(sources.left.is_some());
        assert!(sources.right.is_none());
    }
}
