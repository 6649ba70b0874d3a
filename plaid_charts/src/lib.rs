// Copyright 2025 the Plaid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart building blocks for `plaid_core`.
//!
//! This crate is a small layer above `plaid_core`:
//! - **Scales** map data values into surface coordinates. They are explicit
//!   tagged variants ([`Scale::Band`] / [`Scale::Linear`]), chosen at
//!   construction time rather than probed for capabilities at render time.
//! - **Bar marks** bind ordered `(category key, magnitude)` pairs to rect
//!   geometry under a vertical or horizontal [`Orientation`].
//! - A **[`Plot`]** composes two scales with a retained
//!   [`plaid_core::Surface`], validating bar configuration synchronously and
//!   deferring draw passes through a [`plaid_core::DrawQueue`].
//!
//! Axes, legends and transitions are out of scope; the diffs returned by
//! [`Plot::flush`] are the hand-off point to a renderer.

#![no_std]

extern crate alloc;

mod bar_mark;
mod error;
mod plot;
mod scale;

pub use bar_mark::{BarAxes, BarMarkSpec, Orientation};
pub use error::{Axis, ConfigError};
pub use plot::{Plot, PlotArea};
pub use scale::{Scale, ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec, ScaleSpec};
