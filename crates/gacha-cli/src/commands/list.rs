use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use gacha_catalog::profile::percent;

pub fn run(profiles: Option<&Path>, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(profiles)?;

    if json {
        println!("{}", catalog.to_json().map_err(|e| e.to_string())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "SSR", "SR", "Pity"]);

    for profile in catalog.iter() {
        table.add_row(vec![
            profile.id.clone(),
            profile.name.clone(),
            percent(profile.config.base_ssr_rate),
            percent(profile.config.sr_rate),
            profile.pity_summary(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} profiles", catalog.len());

    Ok(())
}
