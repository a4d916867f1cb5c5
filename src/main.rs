// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Semantic labeler
//!
//! A desktop viewer for image/depth pairs that lets the user draw and name
//! bounding boxes over the displayed pair. Boxes are kept in memory only.

mod app;
mod config;
mod error;
mod io;
mod models;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::LabelerApp;
use clap::Parser;
use config::{Cli, ViewerConfig};
use io::pairs::{DatasetLayout, PairManifest};
use models::landmark::LandmarkSet;
use models::session::Session;
use util::geometry::PaneLayout;

/// Resolve the dataset named on the command line and build a session over it.
fn load_session(cli: &Cli, config: &ViewerConfig) -> Result<Session> {
    let dataset = DatasetLayout::resolve(&cli.root, &cli.name)
        .with_context(|| format!("Cannot open dataset '{}'", cli.name))?;

    let manifest = PairManifest::from_directories(&dataset.images, &dataset.depths, &config.extensions)
        .context("Cannot pair images with depth files")?;

    let landmarks = match &dataset.landmarks {
        Some(dir) => io::landmarks::load_from_dir(dir).context("Cannot load landmarks")?,
        None => LandmarkSet::new(),
    };

    Ok(Session::new(manifest, landmarks, config.box_placement))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_cli(&cli)?;
    let session = load_session(&cli, &config)?;
    log::info!(
        "Loaded {} pairs for '{}' ({} landmarks, {:?} placement)",
        session.len(),
        cli.name,
        session.landmarks().len(),
        session.placement()
    );

    // Size the window to hold both panes
    let (width, height) = PaneLayout::from_config(&config).window_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width + 280.0, height + 48.0])
            .with_title("Image Viewer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "semantic-labeler",
        options,
        Box::new(move |cc| Ok(Box::new(LabelerApp::new(&cc.egui_ctx, session, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
