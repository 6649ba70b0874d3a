// Copyright 2025 the Plaid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained rect elements and positional joins.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;
use peniko::Brush;

/// Identifies one element group on a [`Surface`] (typically one mark's elements).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub u32);

/// The attribute set carried by one rect element.
#[derive(Clone, Debug)]
pub struct RectAttrs {
    /// Element geometry in surface coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Fill opacity in `[0, 1]`, applied on top of the paint's own alpha.
    pub fill_opacity: f32,
}

impl RectAttrs {
    /// Creates attrs with a default fill (`Brush::default()`) and full opacity.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            fill: Brush::default(),
            fill_opacity: 1.0,
        }
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
}

/// A change to one retained rect element, produced by [`Surface::join`].
///
/// Element identity is positional: `index` is the element's slot within its
/// group's draw order, not a semantic key.
#[derive(Clone, Debug)]
pub enum RectDiff {
    /// A new element was created at `index`.
    Enter {
        /// Owning group.
        group: GroupId,
        /// Position within the group.
        index: usize,
        /// Attributes assigned to the new element.
        attrs: RectAttrs,
    },
    /// The element at `index` was kept and its attributes reassigned.
    Update {
        /// Owning group.
        group: GroupId,
        /// Position within the group.
        index: usize,
        /// The element's new attributes.
        attrs: RectAttrs,
    },
    /// The element at `index` was removed.
    Exit {
        /// Owning group.
        group: GroupId,
        /// Position the element held within the group.
        index: usize,
    },
}

/// A retained set of rect elements, grouped and ordered.
///
/// The surface is exclusively owned by whoever drives the joins (a plot); no
/// other writer is assumed.
#[derive(Debug, Default)]
pub struct Surface {
    groups: HashMap<GroupId, Vec<RectAttrs>>,
}

impl Surface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the retained elements of `group`, in draw order.
    pub fn rects(&self, group: GroupId) -> &[RectAttrs] {
        self.groups.get(&group).map_or(&[], Vec::as_slice)
    }

    /// Returns the total element count across all groups.
    pub fn rect_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Reconciles `new` against the retained elements of `group`.
    ///
    /// Correspondence is positional: the i-th incoming rect maps to the i-th
    /// retained element. Surviving elements are updated in place (same
    /// element, new attributes), incoming rects past the old length enter,
    /// old elements past the new length exit. Exits are reported first, then
    /// updates/enters in index order. After the join the group holds exactly
    /// `new`.
    ///
    /// Positional identity produces visually incorrect merges for data
    /// reorderings; callers that need stable merges must keep input order
    /// stable.
    pub fn join(&mut self, group: GroupId, new: Vec<RectAttrs>) -> Vec<RectDiff> {
        let old = self.groups.entry(group).or_default();
        let old_len = old.len();
        let mut diffs = Vec::with_capacity(old_len.max(new.len()));

        for index in new.len()..old_len {
            diffs.push(RectDiff::Exit { group, index });
        }
        for (index, attrs) in new.iter().enumerate() {
            let attrs = attrs.clone();
            if index < old_len {
                diffs.push(RectDiff::Update {
                    group,
                    index,
                    attrs,
                });
            } else {
                diffs.push(RectDiff::Enter {
                    group,
                    index,
                    attrs,
                });
            }
        }

        *old = new;
        diffs
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::*;

    fn rect(i: usize) -> RectAttrs {
        let x = i as f64 * 10.0;
        RectAttrs::new(Rect::new(x, 0.0, x + 10.0, 20.0))
    }

    #[test]
    fn first_join_enters_every_element() {
        let mut surface = Surface::new();
        let group = GroupId(0);

        let diffs = surface.join(group, vec![rect(0), rect(1), rect(2)]);

        assert_eq!(diffs.len(), 3);
        assert!(
            diffs
                .iter()
                .all(|d| matches!(d, RectDiff::Enter { .. })),
            "all diffs should be enters on an empty group"
        );
        assert_eq!(surface.rects(group).len(), 3);
    }

    #[test]
    fn shrinking_join_exits_then_updates_survivors() {
        let mut surface = Surface::new();
        let group = GroupId(0);
        surface.join(group, vec![rect(0), rect(1), rect(2)]);

        let diffs = surface.join(group, vec![rect(5)]);

        let exits: Vec<_> = diffs
            .iter()
            .filter(|d| matches!(d, RectDiff::Exit { .. }))
            .collect();
        assert_eq!(exits.len(), 2, "two trailing elements should exit");
        assert!(
            matches!(diffs[0], RectDiff::Exit { index: 1, .. }),
            "exits come first, in index order"
        );
        assert!(matches!(
            diffs.last(),
            Some(RectDiff::Update { index: 0, .. })
        ));
        assert_eq!(surface.rects(group).len(), 1);
        assert_eq!(surface.rects(group)[0].rect.x0, 50.0);
    }

    #[test]
    fn growing_join_updates_then_enters() {
        let mut surface = Surface::new();
        let group = GroupId(0);
        surface.join(group, vec![rect(0)]);

        let diffs = surface.join(group, vec![rect(3), rect(4)]);

        assert!(matches!(diffs[0], RectDiff::Update { index: 0, .. }));
        assert!(matches!(diffs[1], RectDiff::Enter { index: 1, .. }));
        assert_eq!(surface.rects(group).len(), 2);
    }

    #[test]
    fn groups_are_independent() {
        let mut surface = Surface::new();
        surface.join(GroupId(0), vec![rect(0), rect(1)]);
        surface.join(GroupId(1), vec![rect(2)]);

        assert_eq!(surface.rects(GroupId(0)).len(), 2);
        assert_eq!(surface.rects(GroupId(1)).len(), 1);
        assert_eq!(surface.rect_count(), 3);
    }

    #[test]
    fn empty_join_removes_every_element() {
        let mut surface = Surface::new();
        let group = GroupId(7);
        surface.join(group, vec![rect(0), rect(1)]);

        let diffs = surface.join(group, Vec::new());

        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| matches!(d, RectDiff::Exit { .. })));
        assert!(surface.rects(group).is_empty());
    }
}
