use criterion::{Criterion, black_box, criterion_group, criterion_main};
use unitval::{Registry, create_value};

fn bench_storage_format(c: &mut Criterion) {
    let registry = Registry::new();
    let converter = *registry.lookup("storage-size").unwrap();
    let mut group = c.benchmark_group("storage::format");

    group.bench_function("bytes", |b| {
        b.iter(|| converter.format(black_box(1.126)));
    });

    group.bench_function("kibibytes", |b| {
        b.iter(|| converter.format(black_box(1536.0)));
    });

    group.bench_function("tebibytes", |b| {
        b.iter(|| converter.format(black_box(9.62e12)));
    });

    group.finish();
}

fn bench_time_format(c: &mut Criterion) {
    let registry = Registry::new();
    let converter = *registry.lookup("time").unwrap();
    let mut group = c.benchmark_group("time::format");

    group.bench_function("subsecond", |b| {
        b.iter(|| converter.format(black_box(34.5e-12)));
    });

    group.bench_function("whole_minutes", |b| {
        b.iter(|| converter.format(black_box(1800.0)));
    });

    group.bench_function("clock_form", |b| {
        b.iter(|| converter.format(black_box(50404.33)));
    });

    group.finish();
}

fn bench_unit_value_display(c: &mut Criterion) {
    let v = create_value("1KiB", "storage-size").unwrap();
    let v2 = create_value("2KiB", "storage-size").unwrap();
    let mut group = c.benchmark_group("UnitValue::display");

    group.bench_function("plain", |b| {
        b.iter(|| black_box(v).to_string());
    });

    group.bench_function("arithmetic_result", |b| {
        b.iter(|| (black_box(v) * black_box(v2)).to_string());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_storage_format,
    bench_time_format,
    bench_unit_value_display,
);
criterion_main!(benches);
