// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Box label panel.
//!
//! This module provides the side panel for editing box labels and viewing
//! the landmark overlay.

use crate::models::ledger::LabeledBox;
use crate::models::session::Session;

/// Label field for one box committed on the current pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxEdit {
    pub entry: LabeledBox,
    /// Label last accepted by the ledger
    pub label: String,
    /// Text in the field
    pub text: String,
}

impl BoxEdit {
    pub fn new(entry: LabeledBox, label: &str) -> Self {
        Self {
            entry,
            label: label.to_string(),
            text: label.to_string(),
        }
    }
}

/// Result of properties panel interaction.
pub enum PropertiesAction {
    None,
    /// Editing finished on the field at this index with changed text.
    Rename(usize),
}

/// Display the panel with one label field per committed box.
pub fn show(ui: &mut egui::Ui, session: &Session, edits: &mut [BoxEdit]) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Boxes");
    ui.separator();

    if edits.is_empty() {
        ui.label(egui::RichText::new("No boxes on this pair").weak());
    }

    egui::ScrollArea::vertical()
        .id_source("boxes")
        .max_height(ui.available_height() * 0.6)
        .show(ui, |ui| {
            for (index, edit) in edits.iter_mut().enumerate() {
                let stored = session.ledger().label_of(&edit.entry.rect).is_some();
                let rect = edit.entry.rect;

                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut edit.text)
                            .id_source(("box_label", index))
                            .desired_width(120.0),
                    );
                    if response.lost_focus() && edit.text != edit.label {
                        action = PropertiesAction::Rename(index);
                    }

                    let summary = egui::RichText::new(format!(
                        "{:?} ({:.0}, {:.0}) {:.0}x{:.0}",
                        edit.entry.pane, rect.x, rect.y, rect.width, rect.height
                    ))
                    .weak();
                    if stored {
                        ui.label(summary);
                    } else {
                        ui.label(summary.strikethrough())
                            .on_hover_text("Replaced by a later box; rename to keep it");
                    }
                });
            }
        });

    if !session.landmarks().is_empty() {
        ui.add_space(12.0);
        ui.heading("Landmarks");
        ui.separator();
        egui::ScrollArea::vertical()
            .id_source("landmarks")
            .show(ui, |ui| {
                egui::Grid::new("landmark_grid").striped(true).show(ui, |ui| {
                    for (name, point) in session.landmarks().iter() {
                        ui.label(name);
                        ui.label(format!("{:.1}", point.x));
                        ui.label(format!("{:.1}", point.y));
                        ui.end_row();
                    }
                });
            });
    }

    action
}
