// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the labeling session.

pub mod annotation;
pub mod landmark;
pub mod ledger;
pub mod session;
