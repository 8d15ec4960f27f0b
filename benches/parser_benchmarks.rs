#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexparse::{parse_table, parse_value, tokenize, Whitespace};

const SIMPLE_JSON: &str = r#"{"name": "Alice", "age": 30, "active": true, "bio": null}"#;
const NESTED_JSON: &str =
    r#"{"user": {"name": "Alice", "languages": ["Python", "JavaScript"]}, "active": true}"#;

fn large_json() -> String {
    let entries: Vec<String> = (0..1000)
        .map(|i| format!(r#""key{i}": {{"id": {i}, "tags": ["a", "b"], "ok": true}}"#))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn large_csv() -> String {
    (0..1000)
        .map(|i| format!("{i},name{i},\"quoted, \"\"field\"\" {i}\"\n"))
        .collect()
}

fn bench_tokenizer(c: &mut Criterion) {
    let input = large_json();
    c.bench_function("tokenize_skip", |b| {
        b.iter(|| tokenize(black_box(&input), Whitespace::Skip).count())
    });
    c.bench_function("tokenize_significant", |b| {
        b.iter(|| tokenize(black_box(&input), Whitespace::Significant).count())
    });
}

fn bench_value_parser(c: &mut Criterion) {
    c.bench_function("parse_value_simple", |b| {
        b.iter(|| parse_value(black_box(SIMPLE_JSON)).unwrap())
    });
    c.bench_function("parse_value_nested", |b| {
        b.iter(|| parse_value(black_box(NESTED_JSON)).unwrap())
    });

    let input = large_json();
    c.bench_function("parse_value_large", |b| {
        b.iter(|| parse_value(black_box(&input)).unwrap())
    });
}

fn bench_table_parser(c: &mut Criterion) {
    let input = large_csv();
    c.bench_function("parse_table_large", |b| {
        b.iter(|| parse_table(black_box(&input)))
    });
}

criterion_group!(benches, bench_tokenizer, bench_value_parser, bench_table_parser);
criterion_main!(benches);
