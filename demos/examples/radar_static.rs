// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a static radar chart to SVG.
//!
//! Example:
//!   `cargo run -p understory_radar_demos --example radar_static`
//!
//! The file is written to `demos/out/radar_static.svg`. Set `RUST_LOG=trace`
//! to see every layout pass.

use kurbo::Rect;
use understory_radar_demos::{character_sheet, init_tracing, output_dir};
use understory_radar_ref::MonospaceMeasurer;
use understory_radar_svg::SvgCanvas;

const WIDTH: u32 = 480;
const HEIGHT: u32 = 360;

fn main() -> std::io::Result<()> {
    init_tracing();

    let mut chart = character_sheet();
    let mut canvas = SvgCanvas::new();
    let bounds = Rect::new(0.0, 0.0, f64::from(WIDTH), f64::from(HEIGHT));
    let layout = chart.draw(bounds, &mut canvas, &MonospaceMeasurer::default());
    tracing::info!(
        radius = layout.radius,
        naive_radius = layout.naive_radius,
        ops = canvas.ops().len(),
        "radar chart laid out"
    );

    let path = output_dir()?.join("radar_static.svg");
    std::fs::write(&path, canvas.to_svg(WIDTH, HEIGHT))?;
    tracing::info!(path = %path.display(), "wrote svg");
    Ok(())
}
