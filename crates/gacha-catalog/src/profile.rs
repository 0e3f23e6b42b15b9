//! Profiles: a game configuration plus the metadata needed to present it.

use serde::{Deserialize, Serialize};

use gacha_core::{GameConfig, PickupPolicy, SoftPityCurve};
use gacha_engine::{ValidationIssue, validate_config};

use crate::error::CatalogError;

/// How a banner's ceiling works, as presented to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PityKind {
    /// An SSR is forced at the hard pity threshold.
    Direct,
    /// Exchange points accumulate and can be traded for the pickup.
    Exchange,
    /// No ceiling at all.
    None,
}

impl std::str::FromStr for PityKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct" | "hard" => Ok(Self::Direct),
            "exchange" | "points" => Ok(Self::Exchange),
            "none" | "off" => Ok(Self::None),
            other => Err(CatalogError::InvalidPityKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for PityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Exchange => write!(f, "exchange"),
            Self::None => write!(f, "none"),
        }
    }
}

/// A selectable game profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable identifier used for lookup.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description of the banner's rules.
    #[serde(default)]
    pub description: String,
    /// How the ceiling is presented.
    pub pity_kind: PityKind,
    /// Exchange points needed to trade for the pickup, if the banner has one.
    #[serde(default)]
    pub exchange_cost: Option<u32>,
    /// The rate and pity configuration.
    pub config: GameConfig,
}

impl Profile {
    /// Create a profile with no description and no exchange cost.
    pub fn new(id: &str, name: &str, pity_kind: PityKind, config: GameConfig) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            pity_kind,
            exchange_cost: None,
            config,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set the exchange cost.
    pub fn with_exchange_cost(mut self, cost: u32) -> Self {
        self.exchange_cost = Some(cost);
        self
    }

    /// Validate the profile's configuration.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        validate_config(&self.config)
    }

    /// One-line summary of the ceiling, e.g. "hard pity 90, soft pity from 74".
    pub fn pity_summary(&self) -> String {
        let config = &self.config;
        let mut parts = Vec::new();
        if config.has_hard_pity() {
            parts.push(format!("hard pity {}", config.hard_pity_threshold));
        }
        if let Some(soft) = &config.soft_pity {
            match soft.curve {
                SoftPityCurve::Additive => parts.push(format!(
                    "soft pity from {} (+{:.1}%/draw)",
                    soft.start_count,
                    soft.increment * 100.0
                )),
                SoftPityCurve::Linear => {
                    parts.push(format!("linear soft pity from {}", soft.start_count))
                }
            }
        }
        if let Some(first) = config.rate_steps.first() {
            parts.push(format!(
                "{} rate steps from {}",
                config.rate_steps.len(),
                first.after_count
            ));
        }
        if let Some(cost) = self.exchange_cost {
            parts.push(format!("exchange at {cost} points"));
        }
        if parts.is_empty() {
            "no pity".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Human-readable rule sheet, one fact per line.
    pub fn spec_lines(&self) -> Vec<String> {
        let config = &self.config;
        let mut lines = vec![
            format!("Base SSR rate: {}", percent(config.base_ssr_rate)),
            format!("SR rate: {}", percent(config.sr_rate)),
            format!("Pity: {}", self.pity_summary()),
        ];
        let pickup = match config.pickup_policy {
            PickupPolicy::Always => "every SSR is a pickup".to_string(),
            PickupPolicy::AbsoluteRate(p) => format!("pickup SSR rate {}", percent(p)),
            PickupPolicy::RelativeRate(p) => format!("{} of SSRs are pickups", percent(p)),
            PickupPolicy::FiftyFifty => {
                "50/50; after a loss the next SSR is a guaranteed pickup".to_string()
            }
        };
        lines.push(format!("Pickup: {pickup}"));
        if !config.pity_reset_on_any_ssr {
            lines.push("Pity counter only resets on hard pity".to_string());
        }
        if config.ten_pull_guarantee {
            lines.push("10-pull guarantee: at least one SR".to_string());
        }
        if !self.description.is_empty() {
            lines.push(self.description.clone());
        }
        lines
    }
}

/// Format a probability as a percentage with two decimals.
pub fn percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}
