use rand::{SeedableRng, rngs::StdRng};
use reservoirs::{ReservoirSampler, Weighted, weighted_reservoir_sample};

#[derive(Clone, Debug, Weighted)]
struct Request {
    path: &'static str,
    #[weight]
    bytes: u32,
}

// Works for either sampler.
fn show<S: ReservoirSampler<Request>>(sampler: &S, log: &[Request], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    match sampler.sample(log, &mut rng) {
        Ok(sample) => {
            for req in sample {
                println!("{: >6} {}", req.bytes, req.path);
            }
        }
        Err(e) => eprintln!("sampling failed: {e}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log = [
        Request { path: "/", bytes: 512 },
        Request { path: "/index.html", bytes: 2_048 },
        Request { path: "/video.mp4", bytes: 65_000 },
        Request { path: "/favicon.ico", bytes: 64 },
        Request { path: "/app.js", bytes: 30_000 },
        Request { path: "/style.css", bytes: 4_096 },
    ];

    println!("Uniform, k=2:");
    show(&reservoirs::UniformReservoir::new(2), &log, 7);

    println!("\nA-Chao by bytes, k=2:");
    show(&reservoirs::ChaoReservoir::new(2), &log, 7);

    // Or the free function with a fresh thread rng
    let picked = weighted_reservoir_sample(&log, 3, &mut rand::rng())?;
    println!("\nA-Chao, k=3: {:?}", picked.iter().map(|r| r.path).collect::<Vec<_>>());

    Ok(())
}
