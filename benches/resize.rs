use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};
use seamshrink::{compute_energy, find_seam, resize, Orientation};

fn bench_image(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x ^ y) % 256) as u8, 255])
    })
}

fn seam_search(c: &mut Criterion) {
    let energy = compute_energy(&bench_image(200, 150)).unwrap();
    c.bench_function("vertical seam 200x150", |b| {
        b.iter(|| find_seam(black_box(&energy), Orientation::Vertical))
    });
    c.bench_function("horizontal seam 200x150", |b| {
        b.iter(|| find_seam(black_box(&energy), Orientation::Horizontal))
    });
}

fn shrink(c: &mut Criterion) {
    let img = bench_image(100, 100);
    c.bench_function("shrink 100x100 to 90x95", |b| {
        b.iter(|| resize(black_box(img.clone()), 90, 95, |_| ()))
    });
}

criterion_group!(benches, seam_search, shrink);
criterion_main!(benches);
