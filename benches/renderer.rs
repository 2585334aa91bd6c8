use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use netplots::figure::catalog;
use netplots::layout::compute_layout;
use netplots::render::{Canvas, render_pdf, render_svg};
use netplots::theme::Theme;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let figures = catalog();
    for figure in figures.iter().take(4) {
        let panel = &figure.panels[0];
        let graph = panel
            .archetype
            .build(&mut SmallRng::seed_from_u64(1))
            .expect("build failed");
        group.bench_with_input(BenchmarkId::from_parameter(figure.name), &graph, |b, graph| {
            b.iter(|| {
                let mut rng = SmallRng::seed_from_u64(2);
                let layout = compute_layout(black_box(graph), panel.layout, &mut rng);
                black_box(layout.positions.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let theme = Theme::workshop();
    let figures = catalog();
    for figure in &figures {
        group.bench_with_input(BenchmarkId::from_parameter(figure.name), figure, |b, figure| {
            b.iter(|| {
                let mut canvas = Canvas::for_figure(figure, &theme);
                for (slot, panel) in figure.panels.iter().enumerate() {
                    let mut rng = SmallRng::seed_from_u64(slot as u64);
                    let graph = panel.archetype.build(&mut rng).expect("build failed");
                    let layout = compute_layout(&graph, panel.layout, &mut rng);
                    canvas.draw_panel(slot, panel, &graph, &layout, &theme);
                }
                black_box(render_svg(&canvas, &theme).len());
                black_box(render_pdf(&canvas).len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_layout, bench_end_to_end
);
criterion_main!(benches);
