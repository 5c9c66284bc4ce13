use cs_analysis::{
    agreement_number, check_agreeability, exact_piercing_number, greedy_piercing, MicrolpEngine,
};
use cs_core::rng::RngHandle;
use cs_society::{random_society, uniform_society};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn agreement_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(3);
    let large = random_society("large", 500, 100.0, &mut rng).unwrap();
    let small = random_society("small", 12, 10.0, &mut rng).unwrap();
    let uniform = uniform_society("U(30,7)", 30, 7.0, 0.5).unwrap();

    c.bench_function("agreement_number_500", |b| {
        b.iter(|| black_box(agreement_number(&large)));
    });

    c.bench_function("agreeability_12_choose_4", |b| {
        b.iter(|| black_box(check_agreeability(&small, 2, 4)));
    });

    c.bench_function("greedy_piercing_500", |b| {
        b.iter(|| black_box(greedy_piercing(&large, 0.0)));
    });

    c.bench_function("exact_piercing_u30", |b| {
        b.iter(|| black_box(exact_piercing_number(&uniform, &MicrolpEngine)));
    });
}

criterion_group!(benches, agreement_bench);
criterion_main!(benches);
