// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the radar chart demos.

use std::path::PathBuf;

use peniko::Color;
use understory_radar::{Decoration, FillMode, Parameter, RadarChart, RadarStyle, Series};

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `debug`
/// for the radar crate.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,understory_radar=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Directory the demos write into, created on demand.
pub fn output_dir() -> std::io::Result<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("out");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// A character-sheet style chart with three series.
pub fn character_sheet() -> RadarChart {
    let style = RadarStyle::default()
        .with_background(Color::from_rgba8(0xfa, 0xfa, 0xf7, 0xff))
        .with_axis_stroke(Color::from_rgba8(0xdd, 0xdd, 0xdd, 0xff), 0.5)
        .with_gradations(4);
    let mut chart = RadarChart::default();
    if let Err(err) = chart.set_style(style) {
        tracing::warn!(%err, "falling back to the default radar style");
    }
    chart.set_parameters(
        ["HP", "MP", "STR", "DF", "MGC", "AGI"]
            .into_iter()
            .map(Parameter::new)
            .collect(),
    );
    chart.push_series(
        Series::new([0.9, 0.5, 0.6, 0.2, 0.9, 0.4])
            .with_name("Mage")
            .with_fill(FillMode::Gradient {
                start: Color::from_rgba8(0x7b, 0x4d, 0xd9, 0xb0),
                end: Color::from_rgba8(0x7b, 0x4d, 0xd9, 0x30),
            })
            .with_stroke(Color::from_rgba8(0x7b, 0x4d, 0xd9, 0xff), 1.5)
            .with_decoration(Decoration::Circle(3.0)),
    );
    chart.push_series(
        Series::new([0.6, 0.2, 0.95, 0.8, 0.1, 0.5])
            .with_name("Knight")
            .with_fill(FillMode::Solid(Color::from_rgba8(0xd9, 0x53, 0x4d, 0x60)))
            .with_stroke(Color::from_rgba8(0xd9, 0x53, 0x4d, 0xff), 1.5)
            .with_decoration(Decoration::Square(3.5)),
    );
    chart.push_series(
        Series::new([0.5, 0.4, 0.5, 0.4, 0.3, 0.95])
            .with_name("Rogue")
            .with_stroke(Color::from_rgba8(0x2e, 0x9e, 0x6b, 0xff), 2.0)
            .with_decoration(Decoration::Diamond(4.0))
            .with_decoration_color(Color::from_rgba8(0x1d, 0x6b, 0x48, 0xff)),
    );
    chart
}
