use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crr_instruments::{ExerciseType, OptionType};
use crr_methods::{price_option, CrrInputs};

fn bench_price_option(c: &mut Criterion) {
    let mut group = c.benchmark_group("crr_price_option");
    for steps in [50usize, 200, 800] {
        let american_put = CrrInputs::new(100.0, 100.0, 0.2, 0.05, 1.0, steps)
            .with_option_type(OptionType::Put)
            .with_exercise(ExerciseType::American);
        let id = BenchmarkId::new("american_put", steps);
        group.bench_with_input(id, &american_put, |b, inputs| {
            b.iter(|| price_option(black_box(inputs)))
        });

        let european_call = american_put
            .with_option_type(OptionType::Call)
            .with_exercise(ExerciseType::European);
        let id = BenchmarkId::new("european_call", steps);
        group.bench_with_input(id, &european_call, |b, inputs| {
            b.iter(|| price_option(black_box(inputs)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_price_option);
criterion_main!(benches);
