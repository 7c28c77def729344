use criterion::{criterion_group, criterion_main, Criterion};
use RustedIntegrator::search::composer::Composer;
use RustedIntegrator::search::verifier::is_correct_integral;

fn bench_compose_eval(c: &mut Criterion) {
    c.bench_function("compose + eval", |b| {
        let mut composer = Composer::new(4);
        b.iter(|| {
            composer.compose(20);
            composer.eval(1.5)
        })
    });
}

fn bench_compose_verify(c: &mut Criterion) {
    let points = [(0.2, 1.0), (0.5, 1.0), (0.9, 1.0), (1.5, 1.0), (2.0, 1.0)];
    c.bench_function("compose + verify", |b| {
        let mut composer = Composer::new(4);
        b.iter(|| {
            composer.compose(20);
            is_correct_integral(&mut composer, &points)
        })
    });
}

criterion_group!(benches, bench_compose_eval, bench_compose_verify);
criterion_main!(benches);
