//! Tally how often each value lands in the sample over many runs.
//!
//! `RUST_LOG=reservoirs=trace cargo run --example histogram` shows every call.

use reservoirs::{ChaoReservoir, UniformReservoir, WeightedItem};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

const CALLS: usize = 100_000;
const K: usize = 4;

fn print_hist(title: &str, hist: HashMap<usize, u64>) {
    println!("{title}:");
    let mut values: Vec<(usize, u64)> = hist.into_iter().collect();
    values.sort_by_key(|(v, _)| *v);
    for (value, count) in values {
        println!("{count: >6} {value}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::rng();

    let items: Vec<usize> = (0..10).collect();
    let uniform = UniformReservoir::new(K);
    let mut hist: HashMap<usize, u64> = HashMap::default();
    for _ in 0..CALLS {
        for value in uniform.sample(&items, &mut rng) {
            *hist.entry(value).or_default() += 1;
        }
    }
    print_hist(&format!("Uniform (expect ~{} each)", CALLS * K / items.len()), hist);

    let weights = [10.0, 20.0, 30.0, 10.0, 20.0, 30.0, 10.0, 20.0, 30.0, 10.0];
    let records: Vec<WeightedItem<usize>> = weights
        .into_iter()
        .enumerate()
        .map(|(value, weight)| WeightedItem::new(value, weight))
        .collect();
    let chao = ChaoReservoir::new(K);
    let mut hist: HashMap<usize, u64> = HashMap::default();
    for _ in 0..CALLS {
        for rec in chao.sample(&records, &mut rng)? {
            *hist.entry(rec.value).or_default() += 1;
        }
    }
    println!();
    print_hist("A-Chao (weights 10/20/30; first K fill the reservoir)", hist);

    Ok(())
}
