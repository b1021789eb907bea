use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use reservoirs::{ChaoReservoir, UniformReservoir, WeightedItem};

fn gen_records(n: usize) -> Vec<WeightedItem<usize>> {
    let mut rng = Pcg32::seed_from_u64(777);
    (0..n)
        .map(|i| WeightedItem::new(i, 0.1 + rng.random::<f64>()))
        .collect()
}

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_reservoir");
    for &n in &[1_000usize, 10_000, 100_000] {
        let items: Vec<usize> = (0..n).collect();
        group.throughput(Throughput::Elements(n as u64));

        for &k in &[8usize, 256] {
            let sampler = UniformReservoir::new(k);
            group.bench_function(format!("n={n}_k={k}"), |b| {
                b.iter_batched_ref(
                    || Pcg32::seed_from_u64(999),
                    |rng| black_box(sampler.sample(black_box(&items), rng)),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_chao(c: &mut Criterion) {
    let mut group = c.benchmark_group("chao_reservoir");
    for &n in &[1_000usize, 10_000, 100_000] {
        let records = gen_records(n);
        group.throughput(Throughput::Elements(n as u64));

        for &k in &[8usize, 256] {
            let sampler = ChaoReservoir::new(k);
            group.bench_function(format!("n={n}_k={k}"), |b| {
                b.iter_batched_ref(
                    || Pcg32::seed_from_u64(1001),
                    |rng| black_box(sampler.sample(black_box(&records), rng).unwrap()),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(reservoir, bench_uniform, bench_chao);
criterion_main!(reservoir);
