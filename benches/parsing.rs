use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rson::parse_str;

fn scalar_heavy_document() -> String {
    let mut text = String::from("[");
    for i in 0..500 {
        text.push_str(&format!("{i}, {i}.5, 0x{i:x}, "));
    }
    text.push(']');
    text
}

fn record_heavy_document() -> String {
    let mut text = String::from("{");
    for i in 0..300 {
        text.push_str(&format!("\"key{i:04}\": {{\"n\": {i}, \"ok\": true}}, "));
    }
    text.push('}');
    text
}

fn string_heavy_document() -> String {
    let mut text = String::from("[");
    for i in 0..200 {
        text.push_str(&format!(
            "\"plain text {i}\", 'escaped \\t \\u00e9 \\x41', b\"\\x00\\xff\", "
        ));
    }
    text.push(']');
    text
}

fn tagged_document() -> String {
    let mut text = String::from("[");
    for i in 0..150 {
        text.push_str(&format!(
            "@set [{i}, {}], @datetime \"2026-01-01T00:00:0{}Z\", @duration {i}.25, ",
            i + 1,
            i % 10
        ));
    }
    text.push(']');
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let scalars = scalar_heavy_document();
    let records = record_heavy_document();
    let strings = string_heavy_document();
    let tagged = tagged_document();

    let mut group = c.benchmark_group("parse");
    group.bench_function("scalars", |b| {
        b.iter(|| parse_str(black_box(&scalars)).unwrap())
    });
    group.bench_function("records", |b| {
        b.iter(|| parse_str(black_box(&records)).unwrap())
    });
    group.bench_function("strings", |b| {
        b.iter(|| parse_str(black_box(&strings)).unwrap())
    });
    group.bench_function("tags", |b| {
        b.iter(|| parse_str(black_box(&tagged)).unwrap())
    });
    group.finish();
}

fn benchmark_comments(c: &mut Criterion) {
    let mut commented = String::from("# header\n[\n");
    for i in 0..400 {
        commented.push_str(&format!("  {i}, # entry {i}\n"));
    }
    commented.push(']');

    c.bench_function("parse/comment_heavy", |b| {
        b.iter(|| parse_str(black_box(&commented)).unwrap())
    });
}

criterion_group!(benches, benchmark_parse, benchmark_comments);
criterion_main!(benches);
