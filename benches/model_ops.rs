//! Micro-benchmarks for the pure leaves: footprint arithmetic, input-script
//! rendering, and timing-log parsing.

use codesig_bench::footprint::{footprint, MatrixLayout};
use codesig_bench::params::{CodeParameters, ParameterSet};
use codesig_bench::script::build_script;
use codesig_bench::timing::{parse_body, parse_filename};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn sample_params() -> ParameterSet {
    ParameterSet {
        g1: CodeParameters::new(40, 15, 6),
        g2: CodeParameters::new(50, 15, 7),
        custom_message: false,
        use_precomputed_matrix: false,
    }
}

fn bench_footprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("footprint");
    let layout = MatrixLayout::default();

    for n in [50u64, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| footprint(black_box(n), black_box(n + 10), black_box(n / 4), layout));
        });
    }

    group.finish();
}

fn bench_script(c: &mut Criterion) {
    let params = sample_params();
    c.bench_function("script/build", |b| {
        b.iter(|| build_script(black_box(&params)));
    });
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing_parse");

    let name = "G1_40_15_6_G2_50_15_7_generated.txt";
    group.bench_function("filename", |b| {
        b.iter(|| parse_filename(black_box(name)));
    });

    let body = "key_generation(): 0.0123\n\
        generate_signature(): 0.0456\n\
        verify_signature(): 0.0789\n\
        main(): 0.1500\n";
    group.bench_function("body", |b| {
        b.iter(|| parse_body(black_box(body)));
    });

    group.finish();
}

criterion_group!(benches, bench_footprint, bench_script, bench_parsing);
criterion_main!(benches);
