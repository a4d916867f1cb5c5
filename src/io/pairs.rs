// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image pair discovery.
//!
//! Lists the image and depth directories of a dataset and pairs their
//! entries into a validated manifest.

use crate::error::{LabelerError, Result};
use std::path::{Path, PathBuf};

/// Directories making up one named dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetLayout {
    pub images: PathBuf,
    pub depths: PathBuf,
    /// Present only when the directory exists.
    pub landmarks: Option<PathBuf>,
}

impl DatasetLayout {
    /// Resolve `<root>/<name>/{images,depths,landmarks}`.
    pub fn resolve(root: &Path, name: &str) -> Result<Self> {
        let base = root.join(name);
        let images = base.join("images");
        let depths = base.join("depths");
        let landmarks = base.join("landmarks");

        let missing: Vec<PathBuf> = [&images, &depths]
            .into_iter()
            .filter(|dir| !dir.is_dir())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(LabelerError::DirectoryNotFound { paths: missing });
        }

        Ok(Self {
            images,
            depths,
            landmarks: landmarks.is_dir().then_some(landmarks),
        })
    }
}

/// The primary image and its depth partner.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePair {
    pub left: PathBuf,
    pub right: PathBuf,
}

/// Non-empty, ordered list of image pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct PairManifest {
    pairs: Vec<ImagePair>,
}

impl PairManifest {
    /// Build a manifest from explicit pairs.
    pub fn new(pairs: Vec<ImagePair>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(LabelerError::EmptyManifest);
        }
        Ok(Self { pairs })
    }

    /// Pair the sorted listings of two directories position by position.
    pub fn from_directories(images: &Path, depths: &Path, extensions: &[String]) -> Result<Self> {
        let lefts = list_images(images, extensions)?;
        let rights = list_images(depths, extensions)?;
        if lefts.len() != rights.len() {
            return Err(LabelerError::PairCountMismatch {
                images: lefts.len(),
                depths: rights.len(),
            });
        }

        let pairs: Vec<ImagePair> = lefts
            .into_iter()
            .zip(rights)
            .map(|(left, right)| ImagePair { left, right })
            .collect();

        for (index, pair) in pairs.iter().enumerate() {
            if pair.left.file_stem() != pair.right.file_stem() {
                log::warn!(
                    "Pair {} has differing names: {} / {}",
                    index,
                    pair.left.display(),
                    pair.right.display()
                );
            }
        }

        log::info!("Found {} image pairs in {}", pairs.len(), images.display());
        Ok(Self { pairs })
    }

    pub fn get(&self, index: usize) -> Option<&ImagePair> {
        self.pairs.get(index)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Files directly inside `dir` whose extension is accepted, sorted by name.
pub fn list_images(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LabelerError::DirectoryNotFound {
            paths: vec![dir.to_path_buf()],
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(LabelerError::NoMatchingFiles {
            dir: dir.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

pub(crate) fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|accepted| accepted.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts() -> Vec<String> {
        vec!["jpg".to_string(), "png".to_string()]
    }

    fn touch(dir: &Path, names: &[&str]) {
        fs::create_dir_all(dir).unwrap();
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    #[test]
    fn test_list_images_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), &["b.jpg", "a.PNG", "c.txt", "0.jpg"]);
        fs::create_dir(tmp.path().join("nested.jpg")).unwrap();

        let files = list_images(tmp.path(), &exts()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["0.jpg", "a.PNG", "b.jpg"]);
    }

    #[test]
    fn test_list_images_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            list_images(&missing, &exts()),
            Err(LabelerError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_list_images_no_matches() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), &["notes.txt"]);
        assert!(matches!(
            list_images(tmp.path(), &exts()),
            Err(LabelerError::NoMatchingFiles { .. })
        ));
    }

    #[test]
    fn test_manifest_rejects_count_mismatch() {
        let tmp = tempfile::tempdir().unwrap();
        let images = tmp.path().join("images");
        let depths = tmp.path().join("depths");
        touch(&images, &["0.jpg", "1.jpg"]);
        touch(&depths, &["0.jpg"]);

        match PairManifest::from_directories(&images, &depths, &exts()) {
            Err(LabelerError::PairCountMismatch { images, depths }) => {
                assert_eq!((images, depths), (2, 1));
            }
            other => panic!("expected count mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_manifest_pairs_by_sorted_position() {
        let tmp = tempfile::tempdir().unwrap();
        let images = tmp.path().join("images");
        let depths = tmp.path().join("depths");
        touch(&images, &["1.jpg", "0.jpg"]);
        touch(&depths, &["0.png", "1.png"]);

        let manifest = PairManifest::from_directories(&images, &depths, &exts()).unwrap();
        assert_eq!(manifest.len(), 2);
        let first = manifest.get(0).unwrap();
        assert_eq!(first.left, images.join("0.jpg"));
        assert_eq!(first.right, depths.join("0.png"));
    }

    #[test]
    fn test_empty_manifest_is_rejected() {
        match PairManifest::new(Vec::new()) {
            Err(err @ LabelerError::EmptyManifest) => {
                assert_eq!(err.to_string(), "Pair manifest is empty: no image pairs to show");
            }
            other => panic!("expected empty manifest, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_reports_all_missing_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        match DatasetLayout::resolve(tmp.path(), "run1") {
            Err(LabelerError::DirectoryNotFound { paths }) => {
                assert_eq!(paths.len(), 2);
                assert!(paths[0].ends_with("run1/images"));
                assert!(paths[1].ends_with("run1/depths"));
            }
            other => panic!("expected missing dirs, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_landmarks_optional() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("run1");
        fs::create_dir_all(base.join("images")).unwrap();
        fs::create_dir_all(base.join("depths")).unwrap();

        let layout = DatasetLayout::resolve(tmp.path(), "run1").unwrap();
        assert!(layout.landmarks.is_none());

        fs::create_dir_all(base.join("landmarks")).unwrap();
        let layout = DatasetLayout::resolve(tmp.path(), "run1").unwrap();
        assert_eq!(layout.landmarks, Some(base.join("landmarks")));
    }
}
