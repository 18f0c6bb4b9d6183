mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sensor_bench::sequence::{
    GaussianSequence, HaltonSequence, RandomSequence, SequenceGenerator,
};

const COUNTS: [usize; 4] = [100, 1_000, 10_000, 100_000];

fn bench_generator(c: &mut Criterion, mut generator: Box<dyn SequenceGenerator>) {
    let mut group = c.benchmark_group(format!("sequence/{}", generator.name()));

    for &count in &COUNTS {
        group.throughput(common::points_throughput(count));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let seq = generator.create_sequence(black_box(count), 1000);
                black_box(seq.len());
            });
        });
    }

    group.finish();
}

fn sequence_benches(c: &mut Criterion) {
    bench_generator(c, Box::new(RandomSequence::with_seed(0xC0FFEE)));
    bench_generator(c, Box::new(HaltonSequence::new()));
    bench_generator(c, Box::new(GaussianSequence::with_seed(0xBEEF)));
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sequence_benches
}
criterion_main!(benches);
