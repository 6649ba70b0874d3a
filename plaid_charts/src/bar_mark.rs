// Copyright 2025 the Plaid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;
use plaid_core::RectAttrs;

use crate::error::{Axis, ConfigError};
use crate::scale::{Scale, ScaleBand};

/// Which pixel axis bars extend along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Bars grow upward from a bottom baseline; the x-axis carries the band
    /// scale.
    #[default]
    Vertical,
    /// Bars grow rightward from a left baseline; the y-axis carries the band
    /// scale.
    Horizontal,
}

impl Orientation {
    /// Returns the axis that must carry a band scale for this orientation.
    pub fn band_axis(self) -> Axis {
        match self {
            Self::Vertical => Axis::X,
            Self::Horizontal => Axis::Y,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        })
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(ConfigError::InvalidOrientation(String::from(other))),
        }
    }
}

/// A bar mark derived from ordered `(category key, magnitude)` pairs.
///
/// This generates one rect per pair: the band axis position comes from the
/// key's slot in the band scale, and the bar length from the magnitude pushed
/// through the continuous scale.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Value pairs in rendering order.
    ///
    /// Pair order is also element identity: the i-th pair always corresponds
    /// to the i-th retained rect.
    pub values: Vec<(f64, f64)>,
    /// Bar orientation.
    pub orientation: Orientation,
    /// Fill paint for bars.
    pub fill: Brush,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f32,
}

impl Default for BarMarkSpec {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            orientation: Orientation::default(),
            fill: Brush::Solid(css::BLACK),
            fill_opacity: 1.0,
        }
    }
}

impl BarMarkSpec {
    /// Creates a bar mark spec with vertical orientation and a black fill.
    pub fn new(values: Vec<(f64, f64)>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the fill opacity.
    pub fn with_fill_opacity(mut self, fill_opacity: f32) -> Self {
        self.fill_opacity = fill_opacity;
        self
    }

    /// Checks the band-axis requirement against a plot's scales.
    ///
    /// Vertical bars need `x_scale` to be a band scale, horizontal bars need
    /// `y_scale` to be. On success returns the typed axis pairing consumed by
    /// [`Self::rects`].
    pub fn validate<'a>(
        &self,
        x_scale: &'a Scale,
        y_scale: &'a Scale,
    ) -> Result<BarAxes<'a>, ConfigError> {
        let (band_scale, value) = match self.orientation {
            Orientation::Vertical => (x_scale, y_scale),
            Orientation::Horizontal => (y_scale, x_scale),
        };
        let Some(band) = band_scale.as_band() else {
            return Err(ConfigError::MissingBandScale {
                axis: self.orientation.band_axis(),
                orientation: self.orientation,
            });
        };
        Ok(BarAxes { band, value })
    }

    /// Computes one rect per value pair.
    ///
    /// The pairs themselves are not validated: a key missing from the band
    /// domain or a non-finite magnitude propagates as NaN geometry.
    pub fn rects(&self, axes: BarAxes<'_>) -> Vec<RectAttrs> {
        let BarAxes { band, value } = axes;
        let bw = band.band_width();
        let (r0, r1) = value.range();

        match self.orientation {
            // Pixel y grows downward: a bar spans from the scaled magnitude
            // down to the bottom of the range, so its length is the baseline
            // minus the scaled value.
            Orientation::Vertical => {
                let baseline = r0.max(r1);
                self.values
                    .iter()
                    .map(|&(key, magnitude)| {
                        let x = band.map(key).unwrap_or(f64::NAN);
                        let y = value.map(magnitude);
                        let height = baseline - y;
                        self.style(Rect::new(x, y, x + bw, y + height))
                    })
                    .collect()
            }
            // Bars grow rightward from the range minimum, and the scaled
            // magnitude is the bar length directly (the continuous scale's
            // zero endpoint sits at the baseline). Keep this asymmetric with
            // the vertical formula.
            Orientation::Horizontal => {
                let x = r0.min(r1);
                self.values
                    .iter()
                    .map(|&(key, magnitude)| {
                        let width = value.map(magnitude);
                        let y = band.map(key).unwrap_or(f64::NAN);
                        self.style(Rect::new(x, y, x + width, y + bw))
                    })
                    .collect()
            }
        }
    }

    fn style(&self, rect: Rect) -> RectAttrs {
        RectAttrs::new(rect)
            .with_fill(self.fill.clone())
            .with_fill_opacity(self.fill_opacity)
    }
}

/// The validated (band scale, value scale) pairing for one bar mark.
///
/// Only obtainable from [`BarMarkSpec::validate`], so geometry code never
/// sees a mistyped band axis.
#[derive(Clone, Copy, Debug)]
pub struct BarAxes<'a> {
    band: &'a ScaleBand,
    value: &'a Scale,
}
