// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pane compositing.
//!
//! Every pass starts from the decoded source pixels: the image is scaled to
//! fit its pane, then box outlines and landmark dots are drawn onto that
//! fresh copy. Nothing drawn in one pass survives into the next.

use crate::config::ViewerConfig;
use crate::io::media::PairSources;
use crate::models::annotation::{BoundingBox, Pane};
use crate::models::landmark::LandmarkSet;
use crate::models::session::Session;
use crate::util::geometry::fit_size;
use image::{imageops::FilterType, Rgba, RgbaImage};

/// Visual settings for a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub pane_width: u32,
    pub pane_height: u32,
    pub box_color: Rgba<u8>,
    pub box_line_width: u32,
    pub landmark_color: Rgba<u8>,
    pub landmark_radius: f32,
}

impl RenderStyle {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            pane_width: config.pane_width,
            pane_height: config.pane_height,
            box_color: Rgba(config.box_color),
            box_line_width: config.box_line_width,
            landmark_color: Rgba(config.landmark_color),
            landmark_radius: config.landmark_radius,
        }
    }
}

/// Composited images for both panes.
#[derive(Debug, Clone)]
pub struct PairFrame {
    pub left: RgbaImage,
    pub right: RgbaImage,
}

impl PairFrame {
    /// Composite both panes of the session's current pair.
    pub fn render(session: &Session, sources: &PairSources, style: &RenderStyle) -> Self {
        let landmarks = (!session.landmarks().is_empty()).then(|| session.landmarks());
        Self {
            left: compose(
                sources.left.as_ref(),
                &session.boxes_for(Pane::Left),
                landmarks,
                style,
            ),
            right: compose(sources.right.as_ref(), &session.boxes_for(Pane::Right), None, style),
        }
    }
}

/// Scale `source` to fit the pane and outline `rects` (pane-local) on it.
/// Landmarks are in source pixels and follow the image scale.
pub fn compose(
    source: Option<&RgbaImage>,
    rects: &[BoundingBox],
    landmarks: Option<&LandmarkSet>,
    style: &RenderStyle,
) -> RgbaImage {
    let Some(source) = source else {
        return RgbaImage::new(style.pane_width.max(1), style.pane_height.max(1));
    };

    let (width, height) = fit_size(
        source.width(),
        source.height(),
        style.pane_width,
        style.pane_height,
    );
    let mut canvas = image::imageops::resize(source, width, height, FilterType::Triangle);

    if let Some(landmarks) = landmarks {
        let scale = width as f32 / source.width().max(1) as f32;
        for (_, point) in landmarks.iter() {
            fill_circle(
                &mut canvas,
                point.x * scale,
                point.y * scale,
                style.landmark_radius,
                style.landmark_color,
            );
        }
    }

    for rect in rects {
        stroke_rect(&mut canvas, rect, style.box_line_width, style.box_color);
    }
    canvas
}

/// Outline a rectangle with a solid line centred on its edges.
fn stroke_rect(img: &mut RgbaImage, rect: &BoundingBox, line_width: u32, color: Rgba<u8>) {
    let left = rect.x.round() as i64;
    let top = rect.y.round() as i64;
    let right = rect.right().round() as i64;
    let bottom = rect.bottom().round() as i64;
    let half = line_width as i64 / 2;

    for step in 0..line_width as i64 {
        let d = step - half;
        hline(img, left + d, right - d, top + d, color);
        hline(img, left + d, right - d, bottom - d, color);
        vline(img, left + d, top + d, bottom - d, color);
        vline(img, right - d, top + d, bottom - d, color);
    }
}

fn hline(img: &mut RgbaImage, x0: i64, x1: i64, y: i64, color: Rgba<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    if y < 0 || y >= h {
        return;
    }
    for x in x0.min(x1).max(0)..=x0.max(x1).min(w - 1) {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn vline(img: &mut RgbaImage, x: i64, y0: i64, y1: i64, color: Rgba<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    if x < 0 || x >= w {
        return;
    }
    for y in y0.min(y1).max(0)..=y0.max(y1).min(h - 1) {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    let (w, h) = (img.width() as f32, img.height() as f32);
    if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) {
        return;
    }
    if cx + radius < 0.0 || cx - radius >= w || cy + radius < 0.0 || cy - radius >= h {
        return;
    }

    let r = radius.ceil() as i64;
    let r2 = radius * radius;
    let (x, y) = (cx as i64, cy as i64);
    let (max_x, max_y) = (img.width() as i64 - 1, img.height() as i64 - 1);

    for py in (y - r).max(0)..=(y + r).min(max_y) {
        for px in (x - r).max(0)..=(x + r).min(max_x) {
            let dx = px as f32 + 0.5 - cx;
            let dy = py as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
