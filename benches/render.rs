#[macro_use]
extern crate criterion;
extern crate fractals;
extern crate num_cpus;

use criterion::Criterion;
use fractals::{render, render_threaded, RenderConfig, Shape};

fn config(shape: Shape, iterations: usize) -> RenderConfig {
    RenderConfig::new(shape, 1.5, &[-0.5, 0.0], 0.75, iterations, 2.0)
        .unwrap()
        .with_image_size(200)
}

fn sierpinski(c: &mut Criterion) {
    let config = config(Shape::SierpinskiTriangle, 6);
    c.bench_function("sierpinski 200x200 depth 6", move |b| {
        b.iter(|| render(&config).unwrap())
    });
}

fn mandelbrot_single(c: &mut Criterion) {
    let config = config(Shape::DynamicMandelbrot, 200);
    c.bench_function("mandelbrot 200x200 single", move |b| {
        b.iter(|| render(&config).unwrap())
    });
}

fn mandelbrot_threaded(c: &mut Criterion) {
    let config = config(Shape::DynamicMandelbrot, 200);
    let threads = num_cpus::get();
    c.bench_function("mandelbrot 200x200 threaded", move |b| {
        b.iter(|| render_threaded(&config, threads).unwrap())
    });
}

criterion_group!(benches, sierpinski, mandelbrot_single, mandelbrot_threaded);
criterion_main!(benches);
