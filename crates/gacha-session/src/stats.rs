//! Cumulative draw statistics.

use serde::{Deserialize, Serialize};

use gacha_core::{DrawOutcome, Rarity};

/// Counts over a sequence of draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of draws.
    pub total: u64,
    /// SSR draws.
    pub ssr: u64,
    /// SR draws.
    pub sr: u64,
    /// R draws.
    pub r: u64,
    /// SSR draws that were pickups.
    pub pickup: u64,
    /// SSR draws forced by hard pity.
    pub hard_pity: u64,
    /// Longest run of consecutive draws without an SSR.
    pub longest_ssr_drought: u64,
    #[serde(skip)]
    current_drought: u64,
}

impl Statistics {
    /// Tally a sequence of outcomes.
    pub fn from_outcomes(outcomes: &[DrawOutcome]) -> Self {
        let mut stats = Self::default();
        stats.extend(outcomes);
        stats
    }

    /// Add further outcomes, continuing any SSR drought in progress.
    pub fn extend(&mut self, outcomes: &[DrawOutcome]) {
        for outcome in outcomes {
            self.record(outcome);
        }
    }

    /// Add one outcome.
    pub fn record(&mut self, outcome: &DrawOutcome) {
        self.total += 1;
        match outcome.rarity {
            Rarity::Ssr => {
                self.ssr += 1;
                self.current_drought = 0;
            }
            Rarity::Sr => {
                self.sr += 1;
                self.current_drought += 1;
            }
            Rarity::R => {
                self.r += 1;
                self.current_drought += 1;
            }
        }
        if outcome.is_pickup {
            self.pickup += 1;
        }
        if outcome.is_hard_pity_triggered {
            self.hard_pity += 1;
        }
        self.longest_ssr_drought = self.longest_ssr_drought.max(self.current_drought);
    }

    /// SSR share of all draws.
    pub fn ssr_rate(&self) -> f64 {
        share(self.ssr, self.total)
    }

    /// SR share of all draws.
    pub fn sr_rate(&self) -> f64 {
        share(self.sr, self.total)
    }

    /// Pickup share of all draws.
    pub fn pickup_rate(&self) -> f64 {
        share(self.pickup, self.total)
    }

    /// Pickup share of SSR draws.
    pub fn pickup_share(&self) -> f64 {
        share(self.pickup, self.ssr)
    }
}

fn share(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let stats = Statistics::from_outcomes(&[]);
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.ssr_rate(), 0.0);
        assert_eq!(stats.pickup_share(), 0.0);
    }

    #[test]
    fn counts_and_rates() {
        let outcomes = [
            DrawOutcome::r(),
            DrawOutcome::sr(),
            DrawOutcome::ssr(true, false),
            DrawOutcome::r(),
            DrawOutcome::r(),
            DrawOutcome::r(),
            DrawOutcome::ssr(false, true),
            DrawOutcome::r(),
        ];
        let stats = Statistics::from_outcomes(&outcomes);
        assert_eq!(stats.total, 8);
        assert_eq!(stats.ssr, 2);
        assert_eq!(stats.sr, 1);
        assert_eq!(stats.r, 5);
        assert_eq!(stats.pickup, 1);
        assert_eq!(stats.hard_pity, 1);
        assert_eq!(stats.longest_ssr_drought, 4);
        assert!((stats.ssr_rate() - 0.25).abs() < 1e-12);
        assert!((stats.pickup_share() - 0.5).abs() < 1e-12);
        assert!((stats.pickup_rate() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn extend_carries_drought_across_chunks() {
        let mut stats = Statistics::from_outcomes(&[DrawOutcome::r(); 3]);
        stats.extend(&[DrawOutcome::sr(), DrawOutcome::r()]);
        assert_eq!(stats.longest_ssr_drought, 5);
        stats.extend(&[DrawOutcome::ssr(false, false), DrawOutcome::r()]);
        assert_eq!(stats.longest_ssr_drought, 5);
        assert_eq!(stats.total, 7);
    }

    #[test]
    fn drought_without_any_ssr() {
        let stats = Statistics::from_outcomes(&[DrawOutcome::r(); 7]);
        assert_eq!(stats.longest_ssr_drought, 7);
        assert_eq!(stats.sr_rate(), 0.0);
    }
}
