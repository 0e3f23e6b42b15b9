pub mod check;
pub mod draw;
pub mod list;
pub mod rate;
pub mod show;
pub mod simulate;

use std::path::Path;

use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};
use tracing::debug;

use gacha_catalog::profile::percent;
use gacha_catalog::{Catalog, load_profiles};
use gacha_core::{DrawOutcome, Rarity};
use gacha_session::Statistics;

/// The built-in catalog, or the profile file given with `--profiles`.
fn load_catalog(profiles: Option<&Path>) -> Result<Catalog, String> {
    let catalog = match profiles {
        Some(path) => load_profiles(path).map_err(|e| e.to_string())?,
        None => Catalog::builtin(),
    };
    debug!(profiles = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Short colored label for one draw, e.g. "SSR[PU]".
fn outcome_label(outcome: &DrawOutcome) -> ColoredString {
    let mut label = outcome.rarity.to_string();
    if outcome.is_pickup {
        label.push_str("[PU]");
    }
    if outcome.is_hard_pity_triggered {
        label.push('!');
    }
    match outcome.rarity {
        Rarity::Ssr => label.yellow().bold(),
        Rarity::Sr => label.magenta(),
        Rarity::R => label.dimmed(),
    }
}

/// Table of cumulative statistics.
fn stats_table(stats: &Statistics) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Count", "Rate"]);

    table.add_row(vec!["Draws".to_string(), stats.total.to_string(), String::new()]);
    table.add_row(vec![
        "SSR".to_string(),
        stats.ssr.to_string(),
        percent(stats.ssr_rate()),
    ]);
    table.add_row(vec![
        "SR".to_string(),
        stats.sr.to_string(),
        percent(stats.sr_rate()),
    ]);
    table.add_row(vec![
        "Pickup".to_string(),
        stats.pickup.to_string(),
        percent(stats.pickup_rate()),
    ]);
    table.add_row(vec![
        "Pickup share of SSR".to_string(),
        String::new(),
        percent(stats.pickup_share()),
    ]);
    table.add_row(vec![
        "Hard pity".to_string(),
        stats.hard_pity.to_string(),
        String::new(),
    ]);
    table.add_row(vec![
        "Longest SSR drought".to_string(),
        stats.longest_ssr_drought.to_string(),
        String::new(),
    ]);
    table
}
