// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module maps window coordinates onto the two image panes and
//! computes aspect-preserving fits for displayed images.

use crate::config::ViewerConfig;
use crate::models::annotation::{Pane, Point};

/// A pane's placement in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PaneRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment, so adjacent panes never both claim a point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Offset of `point` from the pane's top-left corner.
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.x, point.y - self.y)
    }

    pub fn to_window(&self, point: Point) -> Point {
        Point::new(point.x + self.x, point.y + self.y)
    }
}

/// Fixed placement of the left and right panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneLayout {
    pub left: PaneRect,
    pub right: PaneRect,
    spacing: f32,
}

impl PaneLayout {
    /// Two `width` x `height` panes side by side, inset by `spacing`.
    pub fn new(width: f32, height: f32, spacing: f32) -> Self {
        Self {
            left: PaneRect::new(spacing, spacing, width, height),
            right: PaneRect::new(spacing + width, spacing, width, height),
            spacing,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(
            config.pane_width as f32,
            config.pane_height as f32,
            config.spacing as f32,
        )
    }

    pub fn pane(&self, pane: Pane) -> &PaneRect {
        match pane {
            Pane::Left => &self.left,
            Pane::Right => &self.right,
        }
    }

    /// Find the pane containing `point` and the pane-local offset.
    /// Panes are checked left, then right.
    pub fn locate(&self, point: Point) -> Option<(Pane, Point)> {
        Pane::ALL
            .into_iter()
            .find(|pane| self.pane(*pane).contains(point))
            .map(|pane| (pane, self.pane(pane).to_local(point)))
    }

    pub fn to_window(&self, pane: Pane, point: Point) -> Point {
        self.pane(pane).to_window(point)
    }

    /// Window size that fits both panes with the configured margins.
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.left.width + self.right.width + self.spacing * 5.0,
            self.left.height.max(self.right.height) + self.spacing * 2.0,
        )
    }
}

/// Largest size with the source aspect ratio that fits inside the box.
/// Always at least 1x1 so the result can back an image buffer.
pub fn fit_size(src_width: u32, src_height: u32, box_width: u32, box_height: u32) -> (u32, u32) {
    if src_width == 0 || src_height == 0 {
        return (box_width.max(1), box_height.max(1));
    }

    let scale = f64::min(
        box_width as f64 / src_width as f64,
        box_height as f64 / src_height as f64,
    );
    let width = (src_width as f64 * scale).round() as u32;
    let height = (src_height as f64 * scale).round() as u32;
    (width.clamp(1, box_width.max(1)), height.clamp(1, box_height.max(1)))
}
