use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use gacha_catalog::profile::percent;
use gacha_engine::rate_at;

/// Range shown when a profile has no hard pity.
const DEFAULT_RANGE_END: u32 = 100;

pub fn run(
    profiles: Option<&Path>,
    id: &str,
    from: Option<u32>,
    to: Option<u32>,
) -> Result<(), String> {
    let catalog = super::load_catalog(profiles)?;
    let profile = catalog.require(id).map_err(|e| e.to_string())?;
    let config = &profile.config;

    let from = from.unwrap_or(1);
    let to = to.unwrap_or(if config.has_hard_pity() {
        config.hard_pity_threshold
    } else {
        DEFAULT_RANGE_END
    });
    if from == 0 || from > to {
        return Err(format!("invalid pity range {from}..={to}"));
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Pity", "SSR rate", "SSR by then"]);

    // Chance of at least one SSR, assuming none earlier in the range.
    let mut miss = 1.0;
    for pity in from..=to {
        let rate = rate_at(pity, config);
        miss *= 1.0 - rate;
        table.add_row(vec![pity.to_string(), percent(rate), percent(1.0 - miss)]);
    }

    println!("{table}");

    Ok(())
}
