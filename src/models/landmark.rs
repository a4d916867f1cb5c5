// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Named landmark points shown over the primary image.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A landmark position in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

/// Landmarks keyed by name, in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: BTreeMap<String, Landmark>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Landmark> {
        self.points.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Landmark)> {
        self.points.iter().map(|(name, point)| (name.as_str(), point))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(String, Landmark)> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = (String, Landmark)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
