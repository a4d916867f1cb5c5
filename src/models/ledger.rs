// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Box ledger for the currently displayed pair.
//!
//! Committed boxes are keyed by their label, so labels are unique within a
//! ledger. Operations that overwrite an existing entry report it through a
//! `LabelCollision` outcome instead of failing.

use super::annotation::{BoundingBox, Pane, Point};
use std::collections::BTreeMap;

/// Label given to every freshly committed box.
pub const DEFAULT_LABEL: &str = "box";

/// A committed rectangle and the pane its draw started in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledBox {
    pub rect: BoundingBox,
    pub pane: Pane,
}

/// The rectangle currently being dragged out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub pane: Pane,
    pub start: Point,
    pub end: Point,
}

impl DrawState {
    /// Normalized rectangle spanned by the start and end points.
    pub fn rect(&self) -> BoundingBox {
        BoundingBox::from_corners(self.start, self.end)
    }
}

/// Result of `begin_draw`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BeginOutcome {
    Started,
    /// A draw was already in progress and has been thrown away.
    Restarted { discarded: DrawState },
}

/// How an entry landed in the ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Insertion {
    Inserted,
    /// The label was taken; the previous entry was overwritten.
    LabelCollision { replaced: LabeledBox },
}

/// A box committed by `commit_draw`.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub label: String,
    pub entry: LabeledBox,
    pub outcome: Insertion,
}

/// Result of `rename`.
#[derive(Debug, Clone, PartialEq)]
pub enum RenameOutcome {
    Renamed { from: String },
    /// The new label equals the current one.
    Unchanged,
    /// Empty labels are dropped; the entry keeps its old label.
    EmptyLabelIgnored,
    /// No entry had the given coordinates, so the box was stored again under
    /// the new label. `replaced` is the entry that label used to hold.
    Restored { replaced: Option<LabeledBox> },
    /// Renamed, but another entry already used the label and was replaced.
    LabelCollision { from: String, replaced: LabeledBox },
}

/// Mapping from label to rectangle, plus the in-progress draw.
#[derive(Debug, Clone, Default)]
pub struct BoxLedger {
    entries: BTreeMap<String, LabeledBox>,
    draw: Option<DrawState>,
}

impl BoxLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draw at `point` in `pane`. Any draw already in progress is
    /// replaced.
    pub fn begin_draw(&mut self, pane: Pane, point: Point) -> BeginOutcome {
        let previous = self.draw.replace(DrawState {
            pane,
            start: point,
            end: point,
        });
        match previous {
            Some(discarded) => BeginOutcome::Restarted { discarded },
            None => BeginOutcome::Started,
        }
    }

    /// Move the end point of the in-progress draw. Returns false when no
    /// draw is in progress.
    pub fn update_draw(&mut self, point: Point) -> bool {
        match self.draw.as_mut() {
            Some(draw) => {
                draw.end = point;
                true
            }
            None => false,
        }
    }

    /// Finish the in-progress draw and store it under [`DEFAULT_LABEL`].
    pub fn commit_draw(&mut self) -> Option<Commit> {
        let draw = self.draw.take()?;
        let entry = LabeledBox {
            rect: draw.rect(),
            pane: draw.pane,
        };
        let outcome = self.insert(DEFAULT_LABEL.to_string(), entry);
        Some(Commit {
            label: DEFAULT_LABEL.to_string(),
            entry,
            outcome,
        })
    }

    /// Re-key the entry whose rectangle equals `entry.rect` to `new_label`.
    ///
    /// A box that is no longer in the ledger (its label was taken by a later
    /// commit) is inserted again under `new_label`.
    pub fn rename(&mut self, entry: &LabeledBox, new_label: &str) -> RenameOutcome {
        if new_label.is_empty() {
            return RenameOutcome::EmptyLabelIgnored;
        }

        let Some(old_label) = self.label_of(&entry.rect).map(str::to_string) else {
            let replaced = self.entries.insert(new_label.to_string(), *entry);
            return RenameOutcome::Restored { replaced };
        };
        if old_label == new_label {
            return RenameOutcome::Unchanged;
        }

        let current = self.entries.remove(&old_label).unwrap_or(*entry);
        match self.insert(new_label.to_string(), current) {
            Insertion::Inserted => RenameOutcome::Renamed { from: old_label },
            Insertion::LabelCollision { replaced } => RenameOutcome::LabelCollision {
                from: old_label,
                replaced,
            },
        }
    }

    /// Drop every entry and any in-progress draw.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.draw = None;
    }

    /// Label of the first entry (in label order) with exactly this rectangle.
    pub fn label_of(&self, rect: &BoundingBox) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.rect == *rect)
            .map(|(label, _)| label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&LabeledBox> {
        self.entries.get(label)
    }

    /// Entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabeledBox)> {
        self.entries.iter().map(|(label, entry)| (label.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn in_progress(&self) -> Option<&DrawState> {
        self.draw.as_ref()
    }

    fn insert(&mut self, label: String, entry: LabeledBox) -> Insertion {
        match self.entries.insert(label, entry) {
            Some(replaced) => Insertion::LabelCollision { replaced },
            None => Insertion::Inserted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_box(ledger: &mut BoxLedger, from: (f32, f32), to: (f32, f32)) -> Commit {
        ledger.begin_draw(Pane::Left, Point::new(from.0, from.1));
        ledger.update_draw(Point::new(to.0, to.1));
        ledger.commit_draw().expect("draw was begun")
    }

    #[test]
    fn test_commit_normalizes_and_uses_default_label() {
        let mut ledger = BoxLedger::new();
        let commit = draw_box(&mut ledger, (50.0, 60.0), (10.0, 10.0));

        assert_eq!(commit.label, DEFAULT_LABEL);
        assert_eq!(commit.outcome, Insertion::Inserted);
        assert_eq!(
            ledger.get("box").map(|e| e.rect),
            Some(BoundingBox::new(10.0, 10.0, 40.0, 50.0))
        );
        assert!(ledger.in_progress().is_none());
    }

    #[test]
    fn test_commit_without_begin_is_noop() {
        let mut ledger = BoxLedger::new();
        assert!(ledger.commit_draw().is_none());
        assert!(!ledger.update_draw(Point::new(1.0, 1.0)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_begin_while_drawing_reports_restart() {
        let mut ledger = BoxLedger::new();
        assert_eq!(
            ledger.begin_draw(Pane::Left, Point::new(1.0, 1.0)),
            BeginOutcome::Started
        );
        ledger.update_draw(Point::new(5.0, 5.0));

        let outcome = ledger.begin_draw(Pane::Right, Point::new(9.0, 9.0));
        match outcome {
            BeginOutcome::Restarted { discarded } => {
                assert_eq!(discarded.pane, Pane::Left);
                assert_eq!(discarded.end, Point::new(5.0, 5.0));
            }
            other => panic!("expected restart, got {:?}", other),
        }
        let draw = ledger.in_progress().copied();
        assert_eq!(draw.map(|d| d.start), Some(Point::new(9.0, 9.0)));
        assert_eq!(draw.map(|d| d.pane), Some(Pane::Right));
    }

    #[test]
    fn test_second_commit_collides_on_default_label() {
        let mut ledger = BoxLedger::new();
        let first = draw_box(&mut ledger, (0.0, 0.0), (10.0, 10.0));
        let second = draw_box(&mut ledger, (20.0, 20.0), (30.0, 30.0));

        assert_eq!(
            second.outcome,
            Insertion::LabelCollision { replaced: first.entry }
        );
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("box").map(|e| e.rect), Some(second.entry.rect));
    }

    #[test]
    fn test_rename_rekeys_entry() {
        let mut ledger = BoxLedger::new();
        let commit = draw_box(&mut ledger, (10.0, 10.0), (50.0, 60.0));

        let outcome = ledger.rename(&commit.entry, "cup");
        assert_eq!(outcome, RenameOutcome::Renamed { from: "box".to_string() });
        assert!(ledger.get("box").is_none());
        assert_eq!(ledger.get("cup").map(|e| e.rect), Some(commit.entry.rect));
    }

    #[test]
    fn test_rename_to_empty_label_is_ignored() {
        let mut ledger = BoxLedger::new();
        let commit = draw_box(&mut ledger, (10.0, 10.0), (50.0, 60.0));

        assert_eq!(
            ledger.rename(&commit.entry, ""),
            RenameOutcome::EmptyLabelIgnored
        );
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("box"), Some(&commit.entry));
    }

    #[test]
    fn test_rename_restores_box_replaced_by_later_commit() {
        let mut ledger = BoxLedger::new();
        let first = draw_box(&mut ledger, (10.0, 10.0), (50.0, 60.0));
        let second = draw_box(&mut ledger, (70.0, 70.0), (90.0, 90.0));
        assert_eq!(ledger.len(), 1);

        let outcome = ledger.rename(&first.entry, "cup");
        assert_eq!(outcome, RenameOutcome::Restored { replaced: None });
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get("cup"), Some(&first.entry));
        assert_eq!(ledger.get("box"), Some(&second.entry));
    }

    #[test]
    fn test_restore_onto_used_label_replaces_it() {
        let mut ledger = BoxLedger::new();
        let first = draw_box(&mut ledger, (10.0, 10.0), (50.0, 60.0));
        let second = draw_box(&mut ledger, (70.0, 70.0), (90.0, 90.0));

        let outcome = ledger.rename(&first.entry, "box");
        assert_eq!(
            outcome,
            RenameOutcome::Restored {
                replaced: Some(second.entry)
            }
        );
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("box"), Some(&first.entry));
    }

    #[test]
    fn test_rename_same_label_is_unchanged() {
        let mut ledger = BoxLedger::new();
        let commit = draw_box(&mut ledger, (1.0, 1.0), (2.0, 2.0));
        assert_eq!(ledger.rename(&commit.entry, "box"), RenameOutcome::Unchanged);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_renaming_two_boxes_to_same_label_merges_them() {
        let mut ledger = BoxLedger::new();
        let first = draw_box(&mut ledger, (0.0, 0.0), (10.0, 10.0));
        ledger.rename(&first.entry, "a");
        let second = draw_box(&mut ledger, (20.0, 20.0), (40.0, 40.0));
        ledger.rename(&second.entry, "b");
        assert_eq!(ledger.len(), 2);

        let outcome = ledger.rename(&second.entry, "a");
        assert_eq!(
            outcome,
            RenameOutcome::LabelCollision {
                from: "b".to_string(),
                replaced: first.entry,
            }
        );
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("a").map(|e| e.rect), Some(second.entry.rect));
    }

    #[test]
    fn test_clear_drops_entries_and_draw() {
        let mut ledger = BoxLedger::new();
        draw_box(&mut ledger, (0.0, 0.0), (10.0, 10.0));
        ledger.begin_draw(Pane::Right, Point::new(3.0, 3.0));

        ledger.clear();
        assert!(ledger.is_empty());
        assert!(ledger.in_progress().is_none());
    }
}
