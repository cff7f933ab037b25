// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Steps a reveal animation on a fixed frame clock and writes every frame
//! as an SVG.
//!
//! The animation mode is selected by a command-line argument:
//!   - `scale_all` (default)
//!   - `one_by_one`
//!   - `parameter`
//!
//! Example:
//!   `cargo run -p understory_radar_demos --example radar_animation -- one_by_one`
//!
//! Frames are written to `demos/out/radar_<mode>_<frame>.svg`.

use std::env;
use std::time::Duration;

use kurbo::Rect;
use understory_radar::{AnimationKind, RadarTimeline, SequencerState};
use understory_radar_demos::{character_sheet, init_tracing, output_dir};
use understory_radar_ref::MonospaceMeasurer;
use understory_radar_svg::SvgCanvas;

const WIDTH: u32 = 480;
const HEIGHT: u32 = 360;
const FRAME: Duration = Duration::from_millis(40);
const MAX_FRAMES: usize = 500;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mode = env::args().nth(1).unwrap_or_else(|| "scale_all".into());
    let (kind, duration) = match mode.as_str() {
        "scale_all" => (AnimationKind::ScaleAll, Duration::from_millis(600)),
        "one_by_one" => (AnimationKind::ScaleOneByOne, Duration::from_millis(400)),
        "parameter" => (
            AnimationKind::ParameterByParameter,
            Duration::from_millis(160),
        ),
        other => return Err(format!("unknown animation mode `{other}`").into()),
    };

    let bounds = Rect::new(0.0, 0.0, f64::from(WIDTH), f64::from(HEIGHT));
    let measurer = MonospaceMeasurer::default();
    let dir = output_dir()?;
    let mut chart = character_sheet();
    let mut canvas = SvgCanvas::new();
    let mut timeline = RadarTimeline::new();

    chart.draw(bounds, &mut canvas, &measurer);
    chart.start_animation(kind, duration, &mut timeline)?;

    let mut frame = 0;
    loop {
        if chart.needs_redraw() {
            canvas.clear();
            chart.draw(bounds, &mut canvas, &measurer);
            let path = dir.join(format!("radar_{mode}_{frame:03}.svg"));
            std::fs::write(&path, canvas.to_svg(WIDTH, HEIGHT))?;
        }
        if chart.animation_state() == SequencerState::Idle || frame >= MAX_FRAMES {
            break;
        }
        chart.advance(&mut timeline, FRAME);
        frame += 1;
    }
    tracing::info!(frames = frame, mode = %mode, "animation finished");
    Ok(())
}
