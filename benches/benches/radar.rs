// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use peniko::Color;
use std::time::Duration;
use understory_radar::{
    AnimationKind, ChartLayout, Decoration, FillMode, Parameter, RadarChart, RadarStyle,
    RadarTimeline, SequencerState, Series,
};
use understory_radar_ref::{MonospaceMeasurer, RecordingCanvas};
use understory_radar_svg::SvgCanvas;

const BOUNDS: Rect = Rect::new(0.0, 0.0, 480.0, 360.0);

fn chart(axes: usize, series: usize) -> RadarChart {
    let mut chart = RadarChart::new(RadarStyle::default()).unwrap();
    chart.set_parameters(
        (0..axes)
            .map(|i| Parameter::new(format!("parameter {i}")))
            .collect(),
    );
    for s in 0..series {
        let values = (0..axes)
            .map(|i| ((i * 7 + s * 3) % 10) as f64 / 10.0)
            .collect::<Vec<_>>();
        chart.push_series(
            Series::new(values)
                .with_fill(FillMode::Gradient {
                    start: Color::from_rgba8(0x33, 0x66, 0xcc, 0xa0),
                    end: Color::from_rgba8(0x33, 0x66, 0xcc, 0x20),
                })
                .with_stroke(Color::from_rgba8(0x33, 0x66, 0xcc, 0xff), 1.5)
                .with_decoration(Decoration::Circle(3.0)),
        );
    }
    chart
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("radar/layout");
    let measurer = MonospaceMeasurer::default();
    let style = RadarStyle::default();

    for axes in [5usize, 12, 48] {
        let chart = chart(axes, 4);
        group.throughput(Throughput::Elements(axes as u64));
        group.bench_with_input(BenchmarkId::new("auto_fit", axes), &chart, |b, chart| {
            b.iter(|| {
                black_box(ChartLayout::compute(
                    BOUNDS,
                    chart.parameters(),
                    chart.series(),
                    &style,
                    &measurer,
                ))
            });
        });
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("radar/draw");
    let measurer = MonospaceMeasurer::default();

    for series in [1usize, 8, 32] {
        let mut chart = chart(8, series);
        group.bench_function(BenchmarkId::new("recording", series), |b| {
            let mut canvas = RecordingCanvas::new();
            b.iter(|| {
                canvas.clear();
                chart.draw(BOUNDS, &mut canvas, &measurer);
                black_box(canvas.counts());
            });
        });
        group.bench_function(BenchmarkId::new("svg", series), |b| {
            let mut canvas = SvgCanvas::new();
            b.iter(|| {
                canvas.clear();
                chart.draw(BOUNDS, &mut canvas, &measurer);
                black_box(canvas.to_svg(480, 360));
            });
        });
    }
    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("radar/animation");
    let measurer = MonospaceMeasurer::default();
    let frame = Duration::from_millis(16);

    for kind in [
        AnimationKind::ScaleAll,
        AnimationKind::ScaleOneByOne,
        AnimationKind::ParameterByParameter,
    ] {
        group.bench_function(format!("{kind:?}"), |b| {
            let mut chart = chart(8, 4);
            let mut canvas = RecordingCanvas::new();
            chart.draw(BOUNDS, &mut canvas, &measurer);
            b.iter(|| {
                let mut timeline = RadarTimeline::new();
                chart
                    .start_animation(kind, Duration::from_millis(160), &mut timeline)
                    .unwrap();
                while chart.animation_state() != SequencerState::Idle {
                    black_box(chart.advance(&mut timeline, frame));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_draw, bench_animation);
criterion_main!(benches);
