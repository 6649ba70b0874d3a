// Copyright 2025 the Plaid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::bar_mark::Orientation;

/// The plot axis a scale is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The horizontal axis (`x_scale`).
    X,
    /// The vertical axis (`y_scale`).
    Y,
}

impl fmt::Display for Axis {
    /// Formats as the scale parameter name (`x_scale` / `y_scale`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x_scale",
            Self::Y => "y_scale",
        })
    }
}

/// Errors reported when a bar mark is (re)configured.
///
/// Both variants are programmer errors: they are fatal, surface synchronously
/// at configuration time, and never degrade into partial rendering. A plot
/// rejects the offending configuration before the drawing surface is touched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An orientation string was neither `"vertical"` nor `"horizontal"`.
    #[error("bar orientation must be in {{vertical, horizontal}}, was \"{0}\"")]
    InvalidOrientation(String),
    /// The scale on the band axis for the current orientation is not a band
    /// scale.
    #[error("{axis} must be a band scale for {orientation} bar charts")]
    MissingBandScale {
        /// The axis that required a band scale.
        axis: Axis,
        /// The orientation that assigned the band role to `axis`.
        orientation: Orientation,
    },
}
