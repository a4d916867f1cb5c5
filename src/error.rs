// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for dataset loading and the labeling session.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving and loading a dataset.
#[derive(Debug, Error)]
pub enum LabelerError {
    /// One or more required directories do not exist.
    #[error("Directory not found: {}", display_paths(.paths))]
    DirectoryNotFound { paths: Vec<PathBuf> },

    /// A directory exists but holds no file with an accepted extension.
    #[error("No matching image files in {}", .dir.display())]
    NoMatchingFiles { dir: PathBuf },

    /// A manifest was built from an empty list of pairs.
    #[error("Pair manifest is empty: no image pairs to show")]
    EmptyManifest,

    /// The image and depth listings cannot be paired one to one.
    #[error("Cannot pair {images} images with {depths} depth files")]
    PairCountMismatch { images: usize, depths: usize },

    /// The landmarks directory holds no YAML file.
    #[error("No landmark file (*.yaml, *.yml) in {}", .dir.display())]
    NoLandmarkFile { dir: PathBuf },

    #[error("Failed to parse landmarks {}: {source}", .path.display())]
    LandmarkParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A file could not be decoded as an image.
    #[error("Failed to decode image {}: {source}", .path.display())]
    ImageDecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid configuration {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, LabelerError>;
