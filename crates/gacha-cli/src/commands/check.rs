use std::path::Path;

use colored::Colorize;

use gacha_catalog::load_profiles;

pub fn run(file: &Path) -> Result<(), String> {
    let catalog = load_profiles(file).map_err(|e| e.to_string())?;

    let mut errors = 0;
    let mut warnings = 0;
    for profile in catalog.iter() {
        for issue in profile.issues() {
            let line = format!("{}: {issue}", profile.id);
            if issue.is_error() {
                errors += 1;
                println!("  {}", line.red());
            } else {
                warnings += 1;
                println!("  {}", line.yellow());
            }
        }
    }

    if errors > 0 {
        return Err(format!("{errors} error(s), {warnings} warning(s)"));
    }

    println!(
        "  All checks passed for '{}'. {} profiles, {warnings} warning(s)",
        file.display(),
        catalog.len()
    );

    Ok(())
}
