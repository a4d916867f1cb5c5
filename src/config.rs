// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line and viewer configuration.
//!
//! Settings come from built-in defaults, optionally overridden by a YAML
//! file (`--config`) and finally by command line flags.

use crate::error::{LabelerError, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Display paired images and depth maps side by side.
#[derive(Debug, Parser)]
#[command(name = "semantic-labeler", version, about)]
pub struct Cli {
    /// Name of the output directory holding images/, depths/ and landmarks/
    pub name: String,

    /// Directory containing the named output directories
    #[arg(long, default_value = "output")]
    pub root: PathBuf,

    /// YAML file with viewer settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Draw committed boxes on both panes
    #[arg(long)]
    pub mirror: bool,
}

/// Where committed boxes are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxPlacement {
    /// Only on the pane the draw started in.
    #[default]
    StartPane,
    /// On both panes, since the two images are aligned.
    Mirror,
}

/// Viewer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub pane_width: u32,
    pub pane_height: u32,
    /// Margin around and between the panes
    pub spacing: u32,
    /// Accepted image extensions, without the dot
    pub extensions: Vec<String>,
    pub box_placement: BoxPlacement,
    /// RGBA outline colour for boxes
    pub box_color: [u8; 4],
    pub box_line_width: u32,
    pub landmark_color: [u8; 4],
    pub landmark_radius: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            pane_width: 720,
            pane_height: 960,
            spacing: 10,
            extensions: vec!["jpg".to_string(), "png".to_string()],
            box_placement: BoxPlacement::StartPane,
            box_color: [0, 255, 0, 255],
            box_line_width: 2,
            landmark_color: [255, 64, 64, 255],
            landmark_radius: 4.0,
        }
    }
}

impl ViewerConfig {
    /// Load settings from a YAML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&yaml).map_err(|source| LabelerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the effective configuration for a command line.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if cli.mirror {
            config.box_placement = BoxPlacement::Mirror;
        }
        Ok(config)
    }
}
