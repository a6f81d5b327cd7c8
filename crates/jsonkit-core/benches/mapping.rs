// Model mapping throughput: text -> model, model -> text, and Value parsing.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonkit_core::{impl_model, models_from_text, models_to_text, raw_value_enum, Model, Value};
use serde::Deserialize;
use std::hint::black_box;

raw_value_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Sex: i64 {
        Male = 1,
        Female = 0,
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Student {
    name: String,
    age: i32,
    sex: Sex,
    scores: Vec<f64>,
}

impl_model!(Student { name, age, sex, scores });

fn roster(len: usize) -> String {
    let rows: Vec<String> = (0..len)
        .map(|i| {
            format!(
                r#"{{"name":"student{i}","age":"{}","sex":{}.0,"scores":[90,"85.5",77]}}"#,
                18 + i % 10,
                i % 2
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}

// ===== SINGLE MODEL =====

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");
    let text = r#"{"name":"Tom","age":"22","sex":1.0,"scores":[90,"85.5",77]}"#;
    group.bench_function("from_text", |b| {
        b.iter(|| Student::from_text(black_box(text)))
    });
    let student = Student::from_text(text);
    group.bench_function("to_text", |b| b.iter(|| black_box(&student).to_text()));
    group.finish();
}

// ===== SEQUENCES =====

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");
    for len in [10, 100, 1000] {
        let text = roster(len);
        group.bench_with_input(BenchmarkId::new("models_from_text", len), &text, |b, text| {
            b.iter(|| models_from_text::<Student>(black_box(text)))
        });
        let students: Vec<Student> = models_from_text(&text);
        group.bench_with_input(BenchmarkId::new("models_to_text", len), &students, |b, s| {
            b.iter(|| models_to_text(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("value_parse", len), &text, |b, text| {
            b.iter(|| Value::from_text(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_sequence);
criterion_main!(benches);
