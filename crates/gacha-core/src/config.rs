//! Declarative banner configuration.
//!
//! A [`GameConfig`] is created once when a profile is selected and stays
//! immutable for the lifetime of a session. Game-specific behaviour (soft
//! pity shape, pickup rules) is expressed as data on the config rather than
//! as separate draw routines.

use serde::{Deserialize, Serialize};

use crate::error::GachaResult;

/// Shape of the soft pity curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftPityCurve {
    /// Each draw past the start adds a fixed increment to the SSR rate.
    #[default]
    Additive,
    /// The SSR rate rises linearly from the base rate to 1.0 at hard pity.
    Linear,
}

/// Gradual SSR rate increase before hard pity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftPity {
    /// Pity count at which the increase begins.
    pub start_count: u32,
    /// Rate added per draw for the additive curve; unused by the linear curve.
    #[serde(default)]
    pub increment: f64,
    /// The curve shape.
    #[serde(default)]
    pub curve: SoftPityCurve,
}

impl SoftPity {
    /// Additive soft pity: `+increment` per draw from `start_count` on.
    pub fn additive(start_count: u32, increment: f64) -> Self {
        Self {
            start_count,
            increment,
            curve: SoftPityCurve::Additive,
        }
    }

    /// Linear soft pity reaching 1.0 at the hard pity threshold.
    pub fn linear(start_count: u32) -> Self {
        Self {
            start_count,
            increment: 0.0,
            curve: SoftPityCurve::Linear,
        }
    }
}

/// A step in a rate table: from `after_count` draws on, the SSR rate is `ssr_rate`.
///
/// Steps are applied in listed order and each match overwrites the previous
/// one, so tables should be written in ascending `after_count` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateStep {
    /// Pity count from which this step applies.
    pub after_count: u32,
    /// SSR rate while this step is the last one matched.
    pub ssr_rate: f64,
}

impl RateStep {
    /// Create a rate step.
    pub fn new(after_count: u32, ssr_rate: f64) -> Self {
        Self {
            after_count,
            ssr_rate,
        }
    }
}

/// How an SSR is classified as pickup (featured) or not.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupPolicy {
    /// Every SSR is a pickup.
    #[default]
    Always,
    /// Pickup when the draw's own sample lands below this rate, i.e. a
    /// sub-band of the SSR band.
    AbsoluteRate(f64),
    /// Pickup decided by an independent sample against this probability.
    RelativeRate(f64),
    /// 50/50 with a guaranteed pickup on the next SSR after a loss.
    FiftyFifty,
}

impl std::fmt::Display for PickupPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Always => write!(f, "always pickup"),
            Self::AbsoluteRate(p) => write!(f, "pickup rate {:.2}% (absolute)", p * 100.0),
            Self::RelativeRate(p) => write!(f, "pickup {:.0}% of SSRs", p * 100.0),
            Self::FiftyFifty => write!(f, "50/50 with guarantee"),
        }
    }
}

/// Complete rate and pity configuration of one banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Base SSR probability.
    pub base_ssr_rate: f64,
    /// SR probability; R is the implicit remainder.
    pub sr_rate: f64,
    /// Pity count at which an SSR is forced. 0 = no hard pity.
    #[serde(default)]
    pub hard_pity_threshold: u32,
    /// Optional soft pity curve.
    #[serde(default)]
    pub soft_pity: Option<SoftPity>,
    /// Optional rate table; empty when unused.
    #[serde(default)]
    pub rate_steps: Vec<RateStep>,
    /// Pickup classification for SSRs.
    #[serde(default)]
    pub pickup_policy: PickupPolicy,
    /// Whether every SSR resets the pity counter, not only hard pity.
    #[serde(default = "default_true")]
    pub pity_reset_on_any_ssr: bool,
    /// Whether draws accumulate exchange points.
    #[serde(default)]
    pub tracks_exchange_points: bool,
    /// Whether a batch of ten or more guarantees at least one SR.
    #[serde(default)]
    pub ten_pull_guarantee: bool,
}

fn default_true() -> bool {
    true
}

impl GameConfig {
    /// Create a config with the given base rates and no pity mechanics.
    pub fn new(base_ssr_rate: f64, sr_rate: f64) -> Self {
        Self {
            base_ssr_rate,
            sr_rate,
            hard_pity_threshold: 0,
            soft_pity: None,
            rate_steps: Vec::new(),
            pickup_policy: PickupPolicy::Always,
            pity_reset_on_any_ssr: true,
            tracks_exchange_points: false,
            ten_pull_guarantee: false,
        }
    }

    /// Parse a config from JSON, applying field defaults.
    pub fn from_json(json: &str) -> GachaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the hard pity threshold (0 disables it).
    pub fn with_hard_pity(mut self, threshold: u32) -> Self {
        self.hard_pity_threshold = threshold;
        self
    }

    /// Set the soft pity curve.
    pub fn with_soft_pity(mut self, soft_pity: SoftPity) -> Self {
        self.soft_pity = Some(soft_pity);
        self
    }

    /// Set the rate table.
    pub fn with_rate_steps(mut self, steps: Vec<RateStep>) -> Self {
        self.rate_steps = steps;
        self
    }

    /// Set the pickup policy.
    pub fn with_pickup(mut self, policy: PickupPolicy) -> Self {
        self.pickup_policy = policy;
        self
    }

    /// Set whether any SSR resets pity.
    pub fn with_pity_reset_on_any_ssr(mut self, reset: bool) -> Self {
        self.pity_reset_on_any_ssr = reset;
        self
    }

    /// Enable or disable exchange point tracking.
    pub fn with_exchange_points(mut self, enabled: bool) -> Self {
        self.tracks_exchange_points = enabled;
        self
    }

    /// Enable or disable the ten-pull SR guarantee.
    pub fn with_ten_pull_guarantee(mut self, enabled: bool) -> Self {
        self.ten_pull_guarantee = enabled;
        self
    }

    /// The implicit R probability. Negative when the SSR and SR masses
    /// exceed 1, which the engine tolerates.
    pub fn r_rate(&self) -> f64 {
        1.0 - self.base_ssr_rate - self.sr_rate
    }

    /// Returns true if hard pity is enabled.
    pub fn has_hard_pity(&self) -> bool {
        self.hard_pity_threshold > 0
    }

    /// Returns true if the pickup policy can carry a guarantee between SSRs.
    pub fn has_pickup_guarantee(&self) -> bool {
        matches!(self.pickup_policy, PickupPolicy::FiftyFifty)
    }
}
