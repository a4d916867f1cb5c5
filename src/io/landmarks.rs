// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Landmark side-file loading.
//!
//! The landmarks directory of a dataset holds one YAML file mapping
//! landmark names to `{x, y}` positions in primary-image pixels.

use super::pairs::has_extension;
use crate::error::{LabelerError, Result};
use crate::models::landmark::LandmarkSet;
use std::path::{Path, PathBuf};

/// Locate the landmark YAML file inside `dir`.
pub fn find_landmark_file(dir: &Path) -> Result<PathBuf> {
    let yaml_exts = ["yaml".to_string(), "yml".to_string()];

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, &yaml_exts) {
            candidates.push(path);
        }
    }
    candidates.sort();

    let count = candidates.len();
    let Some(first) = candidates.into_iter().next() else {
        return Err(LabelerError::NoLandmarkFile {
            dir: dir.to_path_buf(),
        });
    };
    if count > 1 {
        log::warn!(
            "Found {} landmark files in {}, using {}",
            count,
            dir.display(),
            first.display()
        );
    }
    Ok(first)
}

/// Parse a landmark YAML file.
pub fn load_landmarks(path: &Path) -> Result<LandmarkSet> {
    let yaml = std::fs::read_to_string(path)?;
    let landmarks: LandmarkSet =
        serde_yaml::from_str(&yaml).map_err(|source| LabelerError::LandmarkParse {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Loaded {} landmarks from {}", landmarks.len(), path.display());
    Ok(landmarks)
}

/// Find and parse the landmark file of a landmarks directory.
pub fn load_from_dir(dir: &Path) -> Result<LandmarkSet> {
    load_landmarks(&find_landmark_file(dir)?)
}
