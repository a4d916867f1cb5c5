// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The app owns the labeling session and adapts it to egui: widget input is
//! forwarded as session events, and every response asking for a redraw
//! triggers one render pass into the pane textures.

use crate::config::ViewerConfig;
use crate::io::media::PairSources;
use crate::models::ledger::{RenameOutcome, DEFAULT_LABEL};
use crate::models::session::{InputEvent, Response, Session};
use crate::ui::overlay::{PairFrame, RenderStyle};
use crate::ui::{canvas, properties, toolbar};
use crate::util::geometry::PaneLayout;

/// Main application state.
pub struct LabelerApp {
    session: Session,

    /// Fixed pane placement inside the canvas
    layout: PaneLayout,

    style: RenderStyle,

    /// Decoded pixels of the current pair
    sources: PairSources,

    /// Pane textures, rewritten on every render pass
    textures: canvas::PaneTextures,

    /// One label field per box committed on the current pair
    box_edits: Vec<properties::BoxEdit>,
}

impl LabelerApp {
    /// Create the app and render the first pair.
    pub fn new(ctx: &egui::Context, session: Session, config: &ViewerConfig) -> Self {
        let layout = PaneLayout::from_config(config);
        let style = RenderStyle::from_config(config);
        let sources = session
            .current_pair()
            .map(PairSources::load)
            .unwrap_or_default();
        let frame = PairFrame::render(&session, &sources, &style);
        let textures = canvas::PaneTextures::new(ctx, &frame);

        Self {
            session,
            layout,
            style,
            sources,
            textures,
            box_edits: Vec::new(),
        }
    }

    fn handle(&mut self, event: InputEvent) {
        let response = self.session.handle(event, &self.layout);
        self.apply(response);
    }

    /// Act on a session response: reload images after navigation and run
    /// one render pass when asked to.
    fn apply(&mut self, response: Response) {
        if response.navigated {
            self.sources = self
                .session
                .current_pair()
                .map(PairSources::load)
                .unwrap_or_default();
            self.box_edits.clear();
        }
        if let Some(entry) = response.committed {
            self.box_edits.push(properties::BoxEdit::new(entry, DEFAULT_LABEL));
        }
        if response.redraw {
            let frame = PairFrame::render(&self.session, &self.sources, &self.style);
            self.textures.update(&frame);
        }
    }

    /// Apply the text of a label field to its box.
    fn rename(&mut self, index: usize) {
        let Some(edit) = self.box_edits.get_mut(index) else {
            return;
        };
        match self.session.rename(&edit.entry, &edit.text) {
            RenameOutcome::EmptyLabelIgnored => edit.text = edit.label.clone(),
            RenameOutcome::Unchanged => {}
            RenameOutcome::Renamed { .. }
            | RenameOutcome::LabelCollision { .. }
            | RenameOutcome::Restored { .. } => {
                edit.label = edit.text.clone();
                let frame = PairFrame::render(&self.session, &self.sources, &self.style);
                self.textures.update(&frame);
            }
        }
    }
}

impl eframe::App for LabelerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Box labels (right side)
        let properties_action = egui::SidePanel::right("properties")
            .default_width(260.0)
            .show(ctx, |ui| properties::show(ui, &self.session, &mut self.box_edits))
            .inner;

        if let properties::PropertiesAction::Rename(index) = properties_action {
            self.rename(index);
        }

        // Navigation bar
        let nav_action = egui::TopBottomPanel::bottom("navigation")
            .show(ctx, |ui| toolbar::show(ui, &self.session))
            .inner;
        if let Some(event) = nav_action {
            self.handle(event);
        }

        // Arrow keys navigate unless a label is being edited
        if !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
                self.handle(InputEvent::Previous);
            }
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
                self.handle(InputEvent::Next);
            }
        }

        // Image panes (center)
        let events = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .drag_to_scroll(false)
                    .show(ui, |ui| {
                        canvas::show(ui, &self.layout, &self.textures)
                    })
                    .inner
            })
            .inner;

        for event in events {
            self.handle(event);
        }
    }
}
