// Copyright 2025 the Plaid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart demos for `plaid_core`.
mod svg;

use kurbo::Rect;
use peniko::color::palette::css;
use plaid_charts::{
    BarMarkSpec, Orientation, Plot, PlotArea, ScaleBandSpec, ScaleLinearSpec,
};

// (mpg category, vehicle count) sample data.
const FUEL_ECONOMY: [(f64, f64); 11] = [
    (12.0, 580.0),
    (15.0, 420.0),
    (18.0, 1000.0),
    (21.0, 805.0),
    (24.0, 640.0),
    (27.0, 400.0),
    (30.0, 380.0),
    (33.0, 240.0),
    (36.0, 210.0),
    (39.0, 180.0),
    (42.0, 205.0),
];

fn main() {
    let demos = [
        ("plaid_bar_vertical.svg", vertical_demo()),
        ("plaid_bar_horizontal.svg", horizontal_demo()),
        ("plaid_bar_resized.svg", resize_demo()),
    ];

    for (path, svg) in demos {
        std::fs::write(path, svg).expect("write demo svg");
        println!("wrote {path}");
    }
}

fn mpg_keys() -> Vec<f64> {
    FUEL_ECONOMY.iter().map(|&(k, _)| k).collect()
}

fn dump(plot: &mut Plot, area: PlotArea) -> String {
    let diffs = plot.flush().expect("flush");
    let mut scene = svg::SvgScene::default();
    scene.set_view_box(Rect::new(0.0, 0.0, area.width, area.height));
    scene.apply_diffs(&diffs);
    scene.to_svg_string()
}

fn vertical_demo() -> String {
    let area = PlotArea::new(220.0, 120.0);
    let mut plot = Plot::new(
        area,
        ScaleBandSpec::new(mpg_keys())
            .with_padding(0.1, 0.1)
            .instantiate((0.0, area.width)),
        ScaleLinearSpec::new((0.0, 1000.0)).instantiate((area.height, 0.0)),
    );

    plot.add_bar(
        BarMarkSpec::new(FUEL_ECONOMY.to_vec())
            .with_fill(css::CORNFLOWER_BLUE)
            .with_fill_opacity(0.9),
    )
    .expect("vertical bar config");

    dump(&mut plot, area)
}

fn horizontal_demo() -> String {
    let area = PlotArea::new(220.0, 120.0);
    let mut plot = Plot::new(
        area,
        ScaleLinearSpec::new((0.0, 1000.0)).instantiate((0.0, area.width)),
        ScaleBandSpec::new(mpg_keys())
            .with_padding(0.1, 0.1)
            .instantiate((0.0, area.height)),
    );

    plot.add_bar(
        BarMarkSpec::new(FUEL_ECONOMY.to_vec())
            .with_orientation(Orientation::Horizontal)
            .with_fill(css::MEDIUM_SEA_GREEN),
    )
    .expect("horizontal bar config");

    dump(&mut plot, area)
}

fn resize_demo() -> String {
    // Draw small, then re-instantiate the same scale specs against doubled
    // ranges; the second flush recomputes every bar from the new ranges.
    let band = ScaleBandSpec::new(mpg_keys()).with_padding(0.1, 0.1);
    let linear = ScaleLinearSpec::new((0.0, 1000.0));

    let small = PlotArea::new(110.0, 60.0);
    let mut plot = Plot::new(
        small,
        band.instantiate((0.0, small.width)),
        linear.instantiate((small.height, 0.0)),
    );
    plot.add_bar(
        BarMarkSpec::new(FUEL_ECONOMY.to_vec()).with_fill(css::GOLDENROD),
    )
    .expect("bar config");
    plot.flush().expect("flush");

    let large = PlotArea::new(220.0, 120.0);
    plot.resize(
        large,
        band.instantiate((0.0, large.width)),
        linear.instantiate((large.height, 0.0)),
    )
    .expect("resize");

    // After a resize every element updates, so the flush diffs carry the
    // whole surface.
    dump(&mut plot, large)
}
