use std::path::Path;

use colored::Colorize;

pub fn run(profiles: Option<&Path>, id: &str) -> Result<(), String> {
    let catalog = super::load_catalog(profiles)?;
    let profile = catalog.require(id).map_err(|e| e.to_string())?;

    println!(
        "  {} {}",
        profile.name.bold(),
        format!("({})", profile.id).dimmed()
    );
    println!();
    for line in profile.spec_lines() {
        println!("  - {line}");
    }

    let issues = profile.issues();
    if !issues.is_empty() {
        println!();
        println!("  {}", "Configuration Issues".bold().underline());
        for issue in &issues {
            let line = issue.to_string();
            if issue.is_error() {
                println!("  {}", line.red());
            } else {
                println!("  {}", line.yellow());
            }
        }
    }

    Ok(())
}
