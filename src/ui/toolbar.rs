// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation bar.
//!
//! Previous/next buttons and the name of the pair on display.

use crate::models::session::{DragPhase, InputEvent, Session};

/// Display the navigation bar. Returns the navigation requested, if any.
pub fn show(ui: &mut egui::Ui, session: &Session) -> Option<InputEvent> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button(egui::RichText::new("<").size(24.0)).clicked() {
            action = Some(InputEvent::Previous);
        }
        if ui.button(egui::RichText::new(">").size(24.0)).clicked() {
            action = Some(InputEvent::Next);
        }

        ui.separator();

        ui.label(format!("Pair {}/{}", session.current_index() + 1, session.len()));
        if let Some(pair) = session.current_pair() {
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "{} | {}",
                    pair.left.display(),
                    pair.right.display()
                ))
                .weak(),
            );
        }

        ui.separator();
        let hint = match session.phase() {
            DragPhase::Idle => "Drag on an image to draw a box, arrow keys to navigate",
            DragPhase::Dragging => "Release to store the box",
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });

    action
}
