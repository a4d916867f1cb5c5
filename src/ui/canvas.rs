// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas holding the two image panes.
//!
//! The canvas paints the composited pane textures at their fixed layout
//! positions and turns drags on the canvas widget into session events
//! expressed in canvas (window) coordinates. Only presses that egui routes to
//! the canvas count, so panels and clipped regions on top of it keep their
//! own input.

use crate::models::annotation::{Pane, Point};
use crate::models::session::InputEvent;
use crate::ui::overlay::PairFrame;
use crate::util::geometry::PaneLayout;

/// GPU textures for both panes, updated in place after every render pass.
pub struct PaneTextures {
    left: egui::TextureHandle,
    right: egui::TextureHandle,
}

impl PaneTextures {
    pub fn new(ctx: &egui::Context, frame: &PairFrame) -> Self {
        Self {
            left: ctx.load_texture("left_pane", to_color_image(&frame.left), egui::TextureOptions::LINEAR),
            right: ctx.load_texture("right_pane", to_color_image(&frame.right), egui::TextureOptions::LINEAR),
        }
    }

    /// Replace the texture contents with a new render pass.
    pub fn update(&mut self, frame: &PairFrame) {
        self.left.set(to_color_image(&frame.left), egui::TextureOptions::LINEAR);
        self.right.set(to_color_image(&frame.right), egui::TextureOptions::LINEAR);
    }

    fn get(&self, pane: Pane) -> &egui::TextureHandle {
        match pane {
            Pane::Left => &self.left,
            Pane::Right => &self.right,
        }
    }
}

fn to_color_image(img: &image::RgbaImage) -> egui::ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw())
}

/// Display both panes and collect the pointer events aimed at them.
pub fn show(ui: &mut egui::Ui, layout: &PaneLayout, textures: &PaneTextures) -> Vec<InputEvent> {
    let (width, height) = layout.window_size();
    let (canvas_rect, response) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::drag());
    let origin = canvas_rect.min;
    let painter = ui.painter_at(canvas_rect);

    for pane in Pane::ALL {
        let area = layout.pane(pane);
        let pane_rect = egui::Rect::from_min_size(
            origin + egui::vec2(area.x, area.y),
            egui::vec2(area.width, area.height),
        );
        painter.rect_filled(pane_rect, 0.0, egui::Color32::from_gray(30));

        // Images sit at the pane's top-left so pane-local and image
        // coordinates coincide.
        let texture = textures.get(pane);
        let image_rect = egui::Rect::from_min_size(pane_rect.min, texture.size_vec2());
        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    pointer_events(ui, &response, origin)
}

/// Translate the canvas response's primary-button drag into session events.
fn pointer_events(ui: &egui::Ui, response: &egui::Response, origin: egui::Pos2) -> Vec<InputEvent> {
    let to_canvas = |pos: egui::Pos2| Point::new(pos.x - origin.x, pos.y - origin.y);
    let primary = egui::PointerButton::Primary;
    let mut events = Vec::new();

    if response.drag_started_by(primary) {
        let pos = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = pos {
            events.push(InputEvent::PointerDown(to_canvas(pos)));
        }
    } else if response.dragged_by(primary) && response.drag_delta() != egui::Vec2::ZERO {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(InputEvent::PointerMove(to_canvas(pos)));
        }
    }

    if response.drag_stopped_by(primary) {
        let pos = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.latest_pos()))
            .unwrap_or(origin);
        events.push(InputEvent::PointerUp(to_canvas(pos)));
    }
    events
}
