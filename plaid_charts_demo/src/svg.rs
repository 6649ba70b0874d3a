// Copyright 2025 the Plaid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `plaid_charts_demo`.

use std::collections::HashMap;

use kurbo::Rect;
use peniko::Brush;
use plaid_core::{GroupId, RectAttrs, RectDiff};

/// A retained mirror of a surface, built from diffs, dumpable as SVG.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    rects: HashMap<(GroupId, usize), RectAttrs>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn apply_diffs(&mut self, diffs: &[RectDiff]) {
        for diff in diffs {
            match diff {
                RectDiff::Enter {
                    group,
                    index,
                    attrs,
                }
                | RectDiff::Update {
                    group,
                    index,
                    attrs,
                } => {
                    self.rects.insert((*group, *index), attrs.clone());
                }
                RectDiff::Exit { group, index } => {
                    self.rects.remove(&(*group, *index));
                }
            }
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .or_else(|| self.bounds())
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        let mut keys: Vec<_> = self.rects.keys().copied().collect();
        keys.sort_unstable();

        for key in keys {
            let attrs = self.rects.get(&key).expect("key from keys");
            let r = attrs.rect;
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.x0,
                r.y0,
                r.width(),
                r.height(),
            ));
            write_fill_attrs(&mut out, &attrs.fill, attrs.fill_opacity);
            out.push_str("/>\n");
        }

        out.push_str("</svg>\n");
        out
    }

    fn bounds(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        for attrs in self.rects.values() {
            let b = attrs.rect;
            rect = Some(match rect {
                None => b,
                Some(r) => Rect::new(
                    r.x0.min(b.x0),
                    r.y0.min(b.y0),
                    r.x1.max(b.x1),
                    r.y1.max(b.y1),
                ),
            });
        }
        rect.map(|r| {
            // Add a small padding margin.
            let pad = 10.0;
            Rect::new(r.x0 - pad, r.y0 - pad, r.x1 + pad, r.y1 + pad)
        })
    }
}

fn write_fill_attrs(out: &mut String, brush: &Brush, fill_opacity: f32) {
    let (fill, alpha) = match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            (
                format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
                f64::from(rgba.a) / 255.0,
            )
        }
        _ => ("none".to_string(), 1.0),
    };
    out.push_str(&format!(r#" fill="{fill}""#));

    let opacity = alpha * f64::from(fill_opacity);
    if opacity < 1.0 {
        out.push_str(&format!(r#" fill-opacity="{opacity}""#));
    }
}
