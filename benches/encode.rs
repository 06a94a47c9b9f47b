use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use yuvpack::{Bitmap, EncodeError, Encoded, Pixel, Variant, encode};

const IMAGE_WIDTH: usize = 1920;
const IMAGE_HEIGHT: usize = 1080;

fn do_encode(src: &Bitmap, variant: Variant) -> Result<Vec<Encoded>, EncodeError> {
    encode(black_box(src), black_box(variant))
}

#[cfg(feature = "multi-thread")]
fn do_encode_multi_thread(src: &Bitmap, variant: Variant) -> Result<Vec<Encoded>, EncodeError> {
    use yuvpack::encode_multi_thread;

    encode_multi_thread(black_box(src), black_box(variant))
}

type EncodeFunction = fn(&Bitmap, Variant) -> Result<Vec<Encoded>, EncodeError>;

fn run_benchmarks(c: &mut Criterion, do_encode: EncodeFunction, s: &str) {
    let src = Bitmap::from_pixels(
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
        (0..IMAGE_WIDTH * IMAGE_HEIGHT)
            .map(|i| Pixel::new(i as u8, (i >> 8) as u8, (i >> 16) as u8, (i * 3) as u8)),
    )
    .unwrap();

    for variant in Variant::variants() {
        c.bench_function(&format!("RGBA to {variant} {s}"), |b| {
            b.iter(|| do_encode(&src, variant).unwrap())
        });
    }
}

fn single_threaded(c: &mut Criterion) {
    run_benchmarks(c, do_encode, "single threaded")
}

#[cfg(feature = "multi-thread")]
fn multi_threaded(c: &mut Criterion) {
    run_benchmarks(c, do_encode_multi_thread, "multi threaded")
}

#[cfg(feature = "multi-thread")]
criterion_group!(img, single_threaded, multi_threaded);

#[cfg(not(feature = "multi-thread"))]
criterion_group!(img, single_threaded);

criterion_main!(img);
