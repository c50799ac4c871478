use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use runchart_legend::core::Rect;
use runchart_legend::legend::{ChartMode, compute_layout};
use runchart_legend::render::{GridBuffer, NullBuffer};
use runchart_legend::{RunChart, RunChartConfig};
use std::hint::black_box;

fn build_chart(line_count: usize, points_per_line: i64) -> RunChart {
    let mut chart = RunChart::new(RunChartConfig::new().with_precision(2)).expect("chart init");
    for line in 0..line_count {
        let label = format!("series-{line}");
        for t in 0..points_per_line {
            let time = Utc
                .timestamp_opt(1_700_000_000 + t, 0)
                .single()
                .expect("valid ts");
            let value = (t as f64 * 0.1 + line as f64).sin() * 100.0;
            chart
                .consume_value(&label, time, value)
                .expect("valid generated sample");
        }
    }
    chart
}

fn bench_layout_200_lines(c: &mut Criterion) {
    let labels: Vec<String> = (0..200).map(|i| format!("series-{i}")).collect();

    c.bench_function("legend_layout_200_lines", |b| {
        b.iter(|| {
            let _ = compute_layout(
                black_box(labels.iter().map(String::as_str)),
                black_box(ChartMode::Default),
                black_box(true),
                black_box(2),
                black_box(120),
            );
        })
    });
}

fn bench_render_detailed_null(c: &mut Criterion) {
    let mut chart = build_chart(64, 1_000);
    chart.toggle_details();
    let region = Rect::from_size(0, 0, 240, 80);

    c.bench_function("legend_render_detailed_64_lines", |b| {
        b.iter(|| {
            let mut buffer = NullBuffer::default();
            chart.render_legend(&mut buffer, black_box(region));
            black_box(buffer.write_count);
        })
    });
}

fn bench_render_pinpoint_grid(c: &mut Criterion) {
    let mut chart = build_chart(16, 1_000);
    let pinpoint_at = Utc
        .timestamp_opt(1_700_000_500, 0)
        .single()
        .expect("valid ts");
    chart.pinpoint(pinpoint_at);
    let region = Rect::from_size(0, 0, 160, 48);
    let mut grid = GridBuffer::new(160, 48);

    c.bench_function("legend_render_pinpoint_grid_16_lines", |b| {
        b.iter(|| {
            grid.clear();
            chart.render_legend(&mut grid, black_box(region));
        })
    });
}

criterion_group!(
    benches,
    bench_layout_200_lines,
    bench_render_detailed_null,
    bench_render_pinpoint_grid
);
criterion_main!(benches);
