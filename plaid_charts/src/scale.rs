// Copyright 2025 the Plaid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! Scales come in two halves, following the spec/instance split: a `*Spec`
//! carries the data-side configuration (domain, padding) and is instantiated
//! against a pixel range once the plot area is known. Resizing a plot is
//! re-instantiating the same specs against new ranges.

extern crate alloc;

use alloc::vec::Vec;

/// A scale instance: either a discrete band scale or a continuous linear one.
///
/// A bar mark's band axis must carry the [`Scale::Band`] variant; this is
/// checked when the mark is configured, never during a draw pass.
#[derive(Clone, Debug)]
pub enum Scale {
    /// Discrete band scale.
    Band(ScaleBand),
    /// Continuous linear scale.
    Linear(ScaleLinear),
}

impl From<ScaleBand> for Scale {
    fn from(value: ScaleBand) -> Self {
        Self::Band(value)
    }
}

impl From<ScaleLinear> for Scale {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

impl Scale {
    /// Maps a value from domain space into range space.
    ///
    /// Band scales map by domain lookup; a key missing from the band domain
    /// maps to NaN, mirroring how malformed magnitudes pass through a linear
    /// scale unchecked.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Band(s) => s.map(x).unwrap_or(f64::NAN),
            Self::Linear(s) => s.map(x),
        }
    }

    /// Returns the pixel bounds of the output range (as authored).
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Band(s) => s.range(),
            Self::Linear(s) => s.range(),
        }
    }

    /// Returns the band scale if this is the [`Scale::Band`] variant.
    pub fn as_band(&self) -> Option<&ScaleBand> {
        match self {
            Self::Band(s) => Some(s),
            Self::Linear(_) => None,
        }
    }
}

/// A discrete band scale for categorical charts.
///
/// The domain is an ordered list of category keys; each key owns an
/// equal-width slot ("band") of the pixel range.
#[derive(Clone, Debug)]
pub struct ScaleBand {
    domain: Vec<f64>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

/// Specification for a band scale (domain + padding, no range yet).
#[derive(Clone, Debug)]
pub struct ScaleBandSpec {
    /// Category keys, in band order.
    pub domain: Vec<f64>,
    /// Inner padding in band units.
    pub padding_inner: f64,
    /// Outer padding in band units.
    pub padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale over `domain` covering `range`, unpadded.
    pub fn new(domain: Vec<f64>, range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.domain.len() as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.domain.len()
    }

    /// Returns the pixel bounds of the output range (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the position of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }

    /// Maps a category key to the position of its band.
    ///
    /// Returns `None` if the key is not in the domain.
    pub fn map(&self, key: f64) -> Option<f64> {
        let index = self.domain.iter().position(|&k| k == key)?;
        Some(self.x(index))
    }
}

impl ScaleBandSpec {
    /// Creates a new band scale spec with no padding.
    pub fn new(domain: Vec<f64>) -> Self {
        Self {
            domain,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand::new(self.domain.clone(), range)
            .with_padding(self.padding_inner, self.padding_outer)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain only, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns the pixel bounds of the output range (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }
}

/// A scale specification (domain + options, no range yet).
#[derive(Clone, Debug)]
pub enum ScaleSpec {
    /// Discrete band scale.
    Band(ScaleBandSpec),
    /// Continuous linear scale.
    Linear(ScaleLinearSpec),
}

impl From<ScaleBandSpec> for ScaleSpec {
    fn from(value: ScaleBandSpec) -> Self {
        Self::Band(value)
    }
}

impl From<ScaleLinearSpec> for ScaleSpec {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl ScaleSpec {
    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> Scale {
        match self {
            Self::Band(s) => Scale::Band(s.instantiate(range)),
            Self::Linear(s) => Scale::Linear(s.instantiate(range)),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn unpadded_bands_tile_the_range() {
        let scale = ScaleBand::new(vec![12.0, 15.0, 18.0], (0.0, 30.0));
        assert_eq!(scale.band_width(), 10.0);
        assert_eq!(scale.x(0), 0.0);
        assert_eq!(scale.x(1), 10.0);
        assert_eq!(scale.x(2), 20.0);
    }

    #[test]
    fn band_map_looks_keys_up_by_domain_order() {
        let scale = ScaleBand::new(vec![18.0, 12.0, 15.0], (0.0, 30.0));
        assert_eq!(scale.map(18.0), Some(0.0));
        assert_eq!(scale.map(15.0), Some(20.0));
        assert_eq!(scale.map(99.0), None);
    }

    #[test]
    fn scale_map_turns_missing_band_keys_into_nan() {
        let scale = Scale::Band(ScaleBand::new(vec![1.0], (0.0, 10.0)));
        assert!(scale.map(2.0).is_nan());
    }

    #[test]
    fn linear_maps_endpoints_to_range() {
        let s = ScaleLinear::new((0.0, 1000.0), (1000.0, 0.0));
        assert_eq!(s.map(0.0), 1000.0);
        assert_eq!(s.map(1000.0), 0.0);
        assert!((s.map(420.0) - 580.0).abs() < 1e-9);
    }

    #[test]
    fn specs_reinstantiate_against_new_ranges() {
        let spec = ScaleBandSpec::new(vec![1.0, 2.0]);
        assert_eq!(spec.instantiate((0.0, 20.0)).band_width(), 10.0);
        assert_eq!(spec.instantiate((0.0, 40.0)).band_width(), 20.0);

        let spec = ScaleSpec::from(ScaleLinearSpec::new((0.0, 10.0)));
        assert_eq!(spec.instantiate((0.0, 100.0)).map(5.0), 50.0);
    }
}
