// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for image pairs and landmark files.

pub mod landmarks;
pub mod media;
pub mod pairs;
