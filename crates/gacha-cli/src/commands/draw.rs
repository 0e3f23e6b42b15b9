use std::path::Path;

use clap::Args;
use colored::Colorize;

use gacha_catalog::custom::CUSTOM_ID;
use gacha_catalog::profile::percent;
use gacha_catalog::{CustomSettings, PityKind, Profile};
use gacha_session::{Session, SessionConfig};

/// Overrides for the `custom` profile.
#[derive(Args, Debug, Default)]
pub struct CustomArgs {
    /// SSR rate in percent (custom only)
    #[arg(long)]
    pub ssr: Option<f64>,

    /// SR rate in percent (custom only)
    #[arg(long)]
    pub sr: Option<f64>,

    /// Pickup share of SSRs in percent (custom only)
    #[arg(long)]
    pub pickup: Option<f64>,

    /// Ceiling kind: direct, exchange, none (custom only)
    #[arg(long)]
    pub pity_kind: Option<String>,

    /// Hard pity threshold or exchange cost (custom only)
    #[arg(long)]
    pub pity_count: Option<u32>,
}

impl CustomArgs {
    fn is_set(&self) -> bool {
        self.ssr.is_some()
            || self.sr.is_some()
            || self.pickup.is_some()
            || self.pity_kind.is_some()
            || self.pity_count.is_some()
    }

    fn to_settings(&self) -> Result<CustomSettings, String> {
        let defaults = CustomSettings::default();
        let pity_kind = match &self.pity_kind {
            Some(kind) => kind.parse::<PityKind>().map_err(|e| e.to_string())?,
            None => defaults.pity_kind,
        };
        Ok(CustomSettings {
            ssr_percent: self.ssr.unwrap_or(defaults.ssr_percent),
            sr_percent: self.sr.unwrap_or(defaults.sr_percent),
            pickup_percent: self.pickup.or(defaults.pickup_percent),
            pity_kind,
            pity_count: self.pity_count.unwrap_or(defaults.pity_count),
        })
    }
}

fn resolve_profile(
    profiles: Option<&Path>,
    id: &str,
    custom: &CustomArgs,
) -> Result<Profile, String> {
    if custom.is_set() {
        if id != CUSTOM_ID {
            return Err(format!(
                "custom rate options only apply to the '{CUSTOM_ID}' profile"
            ));
        }
        return Ok(custom.to_settings()?.into_profile());
    }
    let catalog = super::load_catalog(profiles)?;
    let profile = catalog.require(id).map_err(|e| e.to_string())?;
    Ok(profile.clone())
}

pub fn run(
    profiles: Option<&Path>,
    id: &str,
    count: u32,
    batches: u32,
    seed: u64,
    custom: &CustomArgs,
    json: bool,
) -> Result<(), String> {
    let profile = resolve_profile(profiles, id, custom)?;
    let mut session = Session::new(profile, SessionConfig::default().with_seed(seed));

    for _ in 0..batches {
        session.draw(count).map_err(|e| e.to_string())?;
    }

    if json {
        println!("{}", session.export_json().map_err(|e| e.to_string())?);
        return Ok(());
    }

    println!(
        "  {} {}",
        session.profile().name.bold(),
        format!("({} x{count}, seed={seed})", session.profile().id).dimmed()
    );
    println!();

    for pull in session.pulls() {
        let labels: Vec<String> = pull
            .outcomes
            .iter()
            .map(|o| super::outcome_label(o).to_string())
            .collect();
        println!("  {} {}", format!("Pull #{}", pull.index).bold(), labels.join(" "));
    }
    println!();

    print_status(&session);
    println!();
    println!("{}", super::stats_table(&session.stats()));

    Ok(())
}

fn print_status(session: &Session) {
    let state = session.state();
    let config = session.config();

    println!("  {}", "Status".bold().underline());
    println!("  Total draws: {}", state.total_draws());
    if config.has_hard_pity() {
        println!(
            "  Pity: {} / {}",
            state.pity_count, config.hard_pity_threshold
        );
    } else {
        println!("  Pity: {}", state.pity_count);
    }
    println!("  Next SSR rate: {}", percent(session.current_rate()));
    if config.tracks_exchange_points {
        match session.profile().exchange_cost {
            Some(cost) if state.exchange_points >= cost => println!(
                "  Exchange points: {} / {cost} {}",
                state.exchange_points,
                "(exchange available)".green()
            ),
            Some(cost) => println!("  Exchange points: {} / {cost}", state.exchange_points),
            None => println!("  Exchange points: {}", state.exchange_points),
        }
    }
    if config.has_pickup_guarantee() {
        let flag = if session.guaranteed_pickup() { "yes" } else { "no" };
        println!("  Next SSR guaranteed pickup: {flag}");
    }
}
