use std::path::Path;

use colored::Colorize;

use gacha_session::simulate;

pub fn run(
    profiles: Option<&Path>,
    id: &str,
    draws: u64,
    seed: u64,
    batch: u32,
) -> Result<(), String> {
    let catalog = super::load_catalog(profiles)?;
    let profile = catalog.require(id).map_err(|e| e.to_string())?;
    let stats = simulate(&profile.config, draws, batch, seed).map_err(|e| e.to_string())?;

    println!(
        "  {} '{}' {}",
        "Simulation".bold(),
        profile.name,
        format!("({draws} draws, seed={seed}, batch={batch})").dimmed()
    );
    println!();
    println!("{}", super::stats_table(&stats));

    if stats.ssr > 0 {
        println!();
        println!(
            "  Average draws per SSR: {:.1}",
            stats.total as f64 / stats.ssr as f64
        );
    }
    if stats.pickup > 0 {
        println!(
            "  Average draws per pickup: {:.1}",
            stats.total as f64 / stats.pickup as f64
        );
    }

    Ok(())
}
