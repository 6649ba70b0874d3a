// Copyright 2025 the Plaid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot composition.
//!
//! A [`Plot`] is the explicit-composition replacement for template nesting: a
//! [`PlotArea`] value object plus a builder that accepts scales and hands out
//! group handles for its marks.

extern crate alloc;

use alloc::vec::Vec;

use plaid_core::{DrawQueue, GroupId, RectDiff, Surface};

use crate::bar_mark::BarMarkSpec;
use crate::error::ConfigError;
use crate::scale::Scale;

/// A plot's data rectangle in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlotArea {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl PlotArea {
    /// Creates a plot area.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A plot composes two scales with a retained drawing surface.
///
/// Bar specs are validated when they are (re)configured, never at draw time:
/// a misconfigured bar is rejected before the surface is touched. Draw passes
/// are deferred through a [`DrawQueue`], so any number of configuration
/// changes in one batch yields exactly one join per bar group at the next
/// [`Plot::flush`]. The surface is owned by the plot; no other writer is
/// assumed.
#[derive(Debug)]
pub struct Plot {
    area: PlotArea,
    x_scale: Scale,
    y_scale: Scale,
    surface: Surface,
    queue: DrawQueue,
    bars: Vec<(GroupId, BarMarkSpec)>,
    next_group: u32,
}

impl Plot {
    /// Creates a plot over `area` with the given axis scales.
    pub fn new(area: PlotArea, x_scale: impl Into<Scale>, y_scale: impl Into<Scale>) -> Self {
        Self {
            area,
            x_scale: x_scale.into(),
            y_scale: y_scale.into(),
            surface: Surface::new(),
            queue: DrawQueue::new(),
            bars: Vec::new(),
            next_group: 0,
        }
    }

    /// Returns the plot area.
    pub fn area(&self) -> PlotArea {
        self.area
    }

    /// Returns the x-axis scale.
    pub fn x_scale(&self) -> &Scale {
        &self.x_scale
    }

    /// Returns the y-axis scale.
    pub fn y_scale(&self) -> &Scale {
        &self.y_scale
    }

    /// Read access to the retained surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Adds a bar mark and schedules its first draw pass.
    ///
    /// The spec is validated immediately; on error nothing is retained and
    /// the surface is untouched.
    pub fn add_bar(&mut self, spec: BarMarkSpec) -> Result<GroupId, ConfigError> {
        spec.validate(&self.x_scale, &self.y_scale)?;
        let group = GroupId(self.next_group);
        self.next_group += 1;
        self.bars.push((group, spec));
        self.queue.schedule(group);
        Ok(group)
    }

    /// Replaces the spec of an existing bar mark and schedules a redraw.
    ///
    /// The new spec is validated immediately; on error the previous spec
    /// stays in place and nothing is scheduled. A `group` that was already
    /// removed is ignored.
    pub fn set_bar(&mut self, group: GroupId, spec: BarMarkSpec) -> Result<(), ConfigError> {
        spec.validate(&self.x_scale, &self.y_scale)?;
        if let Some((_, slot)) = self.bars.iter_mut().find(|(g, _)| *g == group) {
            *slot = spec;
            self.queue.schedule(group);
        }
        Ok(())
    }

    /// Removes a bar mark; all of its elements exit immediately.
    pub fn remove_bar(&mut self, group: GroupId) -> Vec<RectDiff> {
        self.bars.retain(|(g, _)| *g != group);
        self.surface.join(group, Vec::new())
    }

    /// Replaces the plot area and scales, e.g. after a host resize.
    ///
    /// Every retained bar spec is revalidated against the new scales before
    /// anything is committed; on error the plot is unchanged. On success all
    /// bar groups are scheduled, so the next flush recomputes their geometry
    /// from the new ranges with nothing stale surviving.
    pub fn resize(
        &mut self,
        area: PlotArea,
        x_scale: impl Into<Scale>,
        y_scale: impl Into<Scale>,
    ) -> Result<(), ConfigError> {
        let x_scale = x_scale.into();
        let y_scale = y_scale.into();
        for (_, spec) in &self.bars {
            spec.validate(&x_scale, &y_scale)?;
        }

        self.area = area;
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        for (group, _) in &self.bars {
            self.queue.schedule(*group);
        }
        Ok(())
    }

    /// Runs one draw pass per scheduled bar group and returns the diffs.
    ///
    /// Each pass revalidates, computes rect geometry, and joins it against
    /// the surface. Configuration-time validation means the revalidation
    /// cannot fail for specs that reached the queue; the `Result` propagates
    /// instead of panicking.
    pub fn flush(&mut self) -> Result<Vec<RectDiff>, ConfigError> {
        let mut diffs = Vec::new();
        for group in self.queue.take() {
            let Some((_, spec)) = self.bars.iter().find(|(g, _)| *g == group) else {
                continue;
            };
            let axes = spec.validate(&self.x_scale, &self.y_scale)?;
            let rects = spec.rects(axes);
            diffs.extend(self.surface.join(group, rects));
        }
        Ok(diffs)
    }
}
