//! Benchmarks for field reads and rule evaluation.
//!
//! Run with: cargo bench -p form-validator

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use form_validator::prelude::*;

fn signup_rules() -> Vec<BoxedRule<str>> {
    vec![
        Box::new(Required),
        Box::new(MinLength::new(8)),
        Box::new(MaxLength::new(64)),
        Box::new(Email),
    ]
}

// ============================================================================
// Single rules
// ============================================================================

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule");

    for input in ["", "me@me.com", "not-an-email-at-all"] {
        group.bench_with_input(BenchmarkId::new("email", input.len()), input, |b, input| {
            b.iter(|| black_box(Email.validate(black_box(input))));
        });
    }

    let min = MinLength::new(8).exclude_whitespace();
    group.bench_function("min_length_no_whitespace", |b| {
        b.iter(|| black_box(min.validate(black_box("correct horse battery"))));
    });

    let phone = Phone::region("GB");
    group.bench_function("phone_gb", |b| {
        b.iter(|| black_box(phone.validate(black_box("07740973910"))));
    });

    group.finish();
}

// ============================================================================
// Field reads: memoised vs recomputed
// ============================================================================

fn bench_field_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");

    let mut field = TextFieldValidator::from_text("", signup_rules());
    field.on_text_change("jane@example.com");
    group.bench_function("memoised_reads", |b| {
        b.iter(|| {
            black_box(field.is_valid());
            black_box(field.outcome());
            black_box(field.supporting_text(Outcome::Success));
        });
    });

    let mut typing = TextFieldValidator::from_text("", signup_rules());
    let inputs = ["j", "ja", "jane@", "jane@example", "jane@example.com"];
    group.bench_function("typing", |b| {
        b.iter(|| {
            for text in inputs {
                typing.on_text_change(text);
                black_box(typing.error_text());
            }
        });
    });

    let mut password = StringValidator::new("correct horse".to_owned(), Vec::new());
    let confirm = StringValidator::new("correct horse".to_owned(), Vec::new())
        .rule(PasswordMatches::new(password.handle()));
    group.bench_function("cross_field_invalidation", |b| {
        b.iter(|| {
            password.set_value("correct horse".to_owned());
            black_box(confirm.validation_results().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_rules, bench_field_reads);
criterion_main!(benches);
