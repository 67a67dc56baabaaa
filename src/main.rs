use std::error::Error;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};

use hash_collisions::sweep::{default_load_factors, load_curve};
use hash_collisions::workload::{generate_keys, keys_for_load_factor, Distribution};
use hash_collisions::{run, Method, TABLE_SIZE};

#[derive(Parser, Debug)]
#[command(about = "Compare hash table collision resolution strategies")]
struct Args {
    /// `linear` or `chaining`
    #[arg(short, long, default_value = "linear")]
    method: Method,

    #[arg(short, long, default_value_t = 0.5)]
    load_factor: f64,

    /// `uniform`, `clustered` or `skewed`
    #[arg(short, long, default_value = "uniform")]
    distribution: Distribution,

    /// Seed for key generation, random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also print collisions and average probes for load factors 0.1 to 0.9
    #[arg(long)]
    sweep: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| thread_rng().next_u64());
    info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let n = keys_for_load_factor(args.load_factor)?;
    let keys = generate_keys(n, args.distribution, &mut rng)?;
    let stats = run(&keys, args.method);

    println!(
        "{} / {} / load factor {:.2} ({n} keys, {TABLE_SIZE} slots)",
        args.method, args.distribution, args.load_factor
    );
    println!("Total keys inserted\t: {}", stats.total_inserts);
    println!("Total collisions\t: {}", stats.total_collisions);
    if args.method == Method::LinearProbing {
        println!("Total probes\t\t: {}", stats.total_probes);
        println!("Average probes/insert\t: {:.2}", stats.average_probes());
    }

    if args.sweep {
        println!();
        println!("load\tcollisions\tavg probes");
        for point in load_curve(args.method, args.distribution, &default_load_factors(), &mut rng)? {
            println!(
                "{:.1}\t{}\t\t{:.2}",
                point.load_factor,
                point.stats.total_collisions,
                point.average_probes()
            );
        }
    }

    Ok(())
}
