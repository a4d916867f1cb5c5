// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation session state.
//!
//! The session owns the pair manifest, the navigation index and the box
//! ledger of the displayed pair. Input arrives as toolkit-independent
//! [`InputEvent`]s in window coordinates, which keeps the whole model
//! testable without a window.

use super::annotation::{BoundingBox, Pane, Point};
use super::landmark::LandmarkSet;
use super::ledger::{BeginOutcome, BoxLedger, Insertion, LabeledBox, RenameOutcome};
use crate::config::BoxPlacement;
use crate::io::pairs::{ImagePair, PairManifest};
use crate::util::geometry::PaneLayout;

/// Input delivered by the front end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    Previous,
    Next,
}

/// Whether a box is being dragged out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// What the front end has to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Response {
    /// Recompose the pane images.
    pub redraw: bool,
    /// A different pair is now current; its images must be loaded.
    pub navigated: bool,
    /// Box stored by a pointer-up, under the default label.
    pub committed: Option<LabeledBox>,
}

impl Response {
    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }

    fn navigated() -> Self {
        Self {
            redraw: true,
            navigated: true,
            committed: None,
        }
    }

    fn committed(entry: LabeledBox) -> Self {
        Self {
            redraw: true,
            navigated: false,
            committed: Some(entry),
        }
    }
}

/// Labeling session over a manifest of image pairs.
#[derive(Debug, Clone)]
pub struct Session {
    manifest: PairManifest,
    current_index: usize,
    ledger: BoxLedger,
    landmarks: LandmarkSet,
    placement: BoxPlacement,
}

impl Session {
    /// Create a session showing the first pair.
    pub fn new(manifest: PairManifest, landmarks: LandmarkSet, placement: BoxPlacement) -> Self {
        Self {
            manifest,
            current_index: 0,
            ledger: BoxLedger::new(),
            landmarks,
            placement,
        }
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: InputEvent, layout: &PaneLayout) -> Response {
        match event {
            InputEvent::PointerDown(pos) => {
                let Some((pane, local)) = layout.locate(pos) else {
                    return Response::default();
                };
                if let BeginOutcome::Restarted { discarded } = self.ledger.begin_draw(pane, local) {
                    log::warn!("Discarded unfinished box {:?}", discarded.rect());
                }
                Response::redraw()
            }
            InputEvent::PointerMove(pos) => {
                let Some(start_pane) = self.ledger.in_progress().map(|d| d.pane) else {
                    return Response::default();
                };
                match layout.locate(pos) {
                    Some((pane, local)) if pane == start_pane => {
                        self.ledger.update_draw(local);
                        Response::redraw()
                    }
                    _ => Response::default(),
                }
            }
            InputEvent::PointerUp(_) => match self.ledger.commit_draw() {
                Some(commit) => {
                    log::info!(
                        "Committed '{}' at {:?} on {:?} pane, total: {}",
                        commit.label,
                        commit.entry.rect,
                        commit.entry.pane,
                        self.ledger.len()
                    );
                    if let Insertion::LabelCollision { replaced } = commit.outcome {
                        log::warn!("Label '{}' replaced box {:?}", commit.label, replaced.rect);
                    }
                    Response::committed(commit.entry)
                }
                None => Response::default(),
            },
            InputEvent::Previous => self.step(-1),
            InputEvent::Next => self.step(1),
        }
    }

    /// Move `delta` pairs, wrapping in both directions.
    fn step(&mut self, delta: isize) -> Response {
        let len = self.manifest.len();
        if len == 0 {
            return Response::default();
        }
        let next = (self.current_index as isize + delta).rem_euclid(len as isize) as usize;
        self.current_index = next;
        self.ledger.clear();
        log::info!("Showing pair {}/{}", next + 1, len);
        Response::navigated()
    }

    /// Re-label a committed box. The pane images need recomposing unless the
    /// outcome is `Unchanged` or `EmptyLabelIgnored`.
    pub fn rename(&mut self, entry: &LabeledBox, new_label: &str) -> RenameOutcome {
        let outcome = self.ledger.rename(entry, new_label);
        match &outcome {
            RenameOutcome::Renamed { from } => {
                log::info!("Renamed '{}' to '{}'", from, new_label);
            }
            RenameOutcome::LabelCollision { from, replaced } => {
                log::warn!(
                    "Renamed '{}' to '{}', replacing box {:?}",
                    from,
                    new_label,
                    replaced.rect
                );
            }
            RenameOutcome::Restored { replaced } => {
                log::info!("Restored box {:?} as '{}'", entry.rect, new_label);
                if let Some(replaced) = replaced {
                    log::warn!("Label '{}' replaced box {:?}", new_label, replaced.rect);
                }
            }
            RenameOutcome::EmptyLabelIgnored | RenameOutcome::Unchanged => {}
        }
        outcome
    }

    /// Rectangles to outline on `pane`: committed boxes per the placement
    /// mode, then the in-progress draw if it started on this pane.
    pub fn boxes_for(&self, pane: Pane) -> Vec<BoundingBox> {
        let mut rects: Vec<BoundingBox> = self
            .ledger
            .iter()
            .filter(|(_, entry)| self.placement == BoxPlacement::Mirror || entry.pane == pane)
            .map(|(_, entry)| entry.rect)
            .collect();
        if let Some(draw) = self.ledger.in_progress().filter(|d| d.pane == pane) {
            rects.push(draw.rect());
        }
        rects
    }

    pub fn phase(&self) -> DragPhase {
        if self.ledger.in_progress().is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn current_pair(&self) -> Option<&ImagePair> {
        self.manifest.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.manifest.len()
    }

    pub fn ledger(&self) -> &BoxLedger {
        &self.ledger
    }

    pub fn landmarks(&self) -> &LandmarkSet {
        &self.landmarks
    }

    pub fn placement(&self) -> BoxPlacement {
        self.placement
    }
}
