// Copyright 2025 the Plaid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained drawing surface for chart primitives.
//!
//! This crate is the element-management half of a chart renderer:
//! - a [`Surface`] retains rectangle elements per group, in draw order,
//! - [`Surface::join`] reconciles a new rect sequence against the retained
//!   elements positionally, yielding enter/update/exit [`RectDiff`]s,
//! - a [`DrawQueue`] coalesces repeated draw requests so one batch of
//!   configuration changes produces exactly one draw pass per group.
//!
//! Scales, marks and plot composition live in higher layers (`plaid_charts`).
//! Everything here is single-threaded and host-driven: a drained batch runs
//! to completion before the next one can begin.

#![no_std]

extern crate alloc;

mod queue;
mod surface;

pub use queue::{DrawBatch, DrawQueue};
pub use surface::{GroupId, RectAttrs, RectDiff, Surface};
