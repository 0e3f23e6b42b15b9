//! User-tunable custom banner.

use gacha_core::{GameConfig, PickupPolicy};

use crate::profile::{PityKind, Profile};

/// Id of the synthesized custom profile.
pub const CUSTOM_ID: &str = "custom";

/// Player-entered settings for the custom banner, in percent.
///
/// Values are passed through as given; out-of-range rates are left to the
/// engine, which clamps.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomSettings {
    /// SSR rate in percent.
    pub ssr_percent: f64,
    /// SR rate in percent.
    pub sr_percent: f64,
    /// Pickup share of SSRs in percent; `None` makes every SSR a pickup.
    pub pickup_percent: Option<f64>,
    /// Kind of ceiling.
    pub pity_kind: PityKind,
    /// Hard pity threshold or exchange cost, depending on `pity_kind`.
    pub pity_count: u32,
}

impl Default for CustomSettings {
    fn default() -> Self {
        Self {
            ssr_percent: 3.0,
            sr_percent: 15.0,
            pickup_percent: None,
            pity_kind: PityKind::Exchange,
            pity_count: 200,
        }
    }
}

impl CustomSettings {
    /// Set the SSR and SR rates in percent.
    pub fn with_rates(mut self, ssr_percent: f64, sr_percent: f64) -> Self {
        self.ssr_percent = ssr_percent;
        self.sr_percent = sr_percent;
        self
    }

    /// Set the pickup share in percent.
    pub fn with_pickup_percent(mut self, pickup_percent: Option<f64>) -> Self {
        self.pickup_percent = pickup_percent;
        self
    }

    /// Set the ceiling kind and its count.
    pub fn with_pity(mut self, pity_kind: PityKind, pity_count: u32) -> Self {
        self.pity_kind = pity_kind;
        self.pity_count = pity_count;
        self
    }

    /// Build the game configuration these settings describe.
    pub fn to_config(&self) -> GameConfig {
        let pickup = match self.pickup_percent {
            Some(p) => PickupPolicy::RelativeRate(p / 100.0),
            None => PickupPolicy::Always,
        };
        let config = GameConfig::new(self.ssr_percent / 100.0, self.sr_percent / 100.0)
            .with_pickup(pickup);
        match self.pity_kind {
            PityKind::Direct => config.with_hard_pity(self.pity_count),
            // Exchange is the ceiling here; the count is not also a hard pity.
            PityKind::Exchange => config.with_exchange_points(true),
            PityKind::None => config,
        }
    }

    /// Build the `custom` profile.
    pub fn into_profile(self) -> Profile {
        let config = self.to_config();
        let profile = Profile::new(CUSTOM_ID, "Custom", self.pity_kind, config)
            .with_description("Rates and ceiling set by the player.");
        match self.pity_kind {
            PityKind::Exchange => profile.with_exchange_cost(self.pity_count),
            PityKind::Direct | PityKind::None => profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let profile = CustomSettings::default().into_profile();
        assert_eq!(profile.id, "custom");
        assert_eq!(profile.pity_kind, PityKind::Exchange);
        assert_eq!(profile.exchange_cost, Some(200));
        let config = &profile.config;
        assert!((config.base_ssr_rate - 0.03).abs() < 1e-12);
        assert!((config.sr_rate - 0.15).abs() < 1e-12);
        assert!(config.tracks_exchange_points);
        assert!(!config.has_hard_pity());
        assert_eq!(config.pickup_policy, PickupPolicy::Always);
    }

    #[test]
    fn exchange_pity_has_no_forced_ssr() {
        let profile = CustomSettings::default()
            .with_pity(PityKind::Exchange, 150)
            .into_profile();
        assert_eq!(profile.config.hard_pity_threshold, 0);
        assert_eq!(profile.exchange_cost, Some(150));
        assert_eq!(profile.pity_summary(), "exchange at 150 points");
    }

    #[test]
    fn direct_pity_sets_threshold() {
        let config = CustomSettings::default()
            .with_pity(PityKind::Direct, 120)
            .to_config();
        assert_eq!(config.hard_pity_threshold, 120);
        assert!(!config.tracks_exchange_points);
    }

    #[test]
    fn no_pity() {
        let profile = CustomSettings::default()
            .with_pity(PityKind::None, 50)
            .into_profile();
        assert!(!profile.config.has_hard_pity());
        assert!(!profile.config.tracks_exchange_points);
        assert_eq!(profile.exchange_cost, None);
        assert_eq!(profile.pity_summary(), "no pity");
    }

    #[test]
    fn pickup_percent_is_relative() {
        let config = CustomSettings::default()
            .with_pickup_percent(Some(50.0))
            .to_config();
        assert_eq!(config.pickup_policy, PickupPolicy::RelativeRate(0.5));
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let config = CustomSettings::default().with_rates(150.0, -5.0).to_config();
        assert!((config.base_ssr_rate - 1.5).abs() < 1e-12);
        assert!((config.sr_rate + 0.05).abs() < 1e-12);
    }
}
