//! Generate a cluster and print a summary of every star
//!
//! Usage: cargo run -p cluster-generator --example generate_cluster -- [seed] [stars]
//!
//! Set RUST_LOG=cluster_generator=debug for per-system detail.

use cluster_generator::{Preferences, generate_cluster};
use planetary::ThemeCatalog;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(42);
    let stars: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(64);

    let prefs = Preferences::default();
    let themes = ThemeCatalog::builtin();
    let cluster = generate_cluster(seed, stars, &prefs, &themes)?;

    println!("{} ({} stars)", cluster.metadata.catalog_name(), cluster.stars.len());
    println!("star,category,companions,planets,bodies,luminosity,solar_power");
    for star in &cluster.stars {
        println!(
            "{},{},{},{},{},{:.3},{:.3}",
            star.name,
            star.category,
            star.companions.len(),
            star.planets.len(),
            star.body_count(),
            star.luminosity(),
            star.solar_power,
        );
    }

    eprintln!("Home: {}", cluster.birth_planet_name);
    Ok(())
}
