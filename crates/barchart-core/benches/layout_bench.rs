use barchart_core::{ApproxTextMetrics, BarChartView, BarData, RecordingCanvas};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_view(n: usize) -> BarChartView<ApproxTextMetrics> {
    let data = (0..n)
        .map(|i| BarData::new(format!("c{i}"), ((i as f32) * 0.37).sin().abs() * 100.0))
        .collect();
    let mut view = BarChartView::new(ApproxTextMetrics::default());
    view.set_size(1280, 720);
    view.set_y_axis_data(data);
    view
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("bar_layout");
    for &n in &[6usize, 64, 512] {
        let view = build_view(n);
        group.bench_function(format!("geometry_{n}"), |b| b.iter(|| black_box(view.geometry())));
        group.bench_function(format!("record_{n}"), |b| {
            b.iter(|| {
                let mut rec = RecordingCanvas::new();
                view.on_draw(&mut rec);
                black_box(rec.into_commands())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
