//! Per-session draw state and the outcome of a single draw.

use serde::{Deserialize, Serialize};

use crate::rarity::Rarity;

/// The result of resolving one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// The rarity tier drawn.
    pub rarity: Rarity,
    /// Whether the item is a pickup (featured) SSR.
    pub is_pickup: bool,
    /// Whether this SSR was forced by hard pity.
    pub is_hard_pity_triggered: bool,
}

impl DrawOutcome {
    /// An SSR outcome.
    pub fn ssr(is_pickup: bool, is_hard_pity_triggered: bool) -> Self {
        Self {
            rarity: Rarity::Ssr,
            is_pickup,
            is_hard_pity_triggered,
        }
    }

    /// An SR outcome.
    pub fn sr() -> Self {
        Self {
            rarity: Rarity::Sr,
            is_pickup: false,
            is_hard_pity_triggered: false,
        }
    }

    /// An R outcome.
    pub fn r() -> Self {
        Self {
            rarity: Rarity::R,
            is_pickup: false,
            is_hard_pity_triggered: false,
        }
    }
}

impl std::fmt::Display for DrawOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rarity)?;
        if self.is_pickup {
            write!(f, " [PU]")?;
        }
        if self.is_hard_pity_triggered {
            write!(f, " [pity]")?;
        }
        Ok(())
    }
}

/// Mutable draw state owned by exclusively one simulation session.
///
/// `total_draws` and `history` only change together through
/// [`DrawState::begin_draw`] and [`DrawState::record`], so after every
/// completed draw `total_draws() == history().len()`, until the history
/// is taken with [`DrawState::drain_history`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawState {
    /// Draws since the last pity-resetting SSR.
    pub pity_count: u32,
    /// Exchange points accumulated; never reset by SSRs.
    pub exchange_points: u32,
    /// Set after losing a 50/50; consumed by the next SSR.
    pub guaranteed_pickup: bool,
    total_draws: u64,
    history: Vec<DrawOutcome>,
}

impl DrawState {
    /// Fresh state for a new session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total draws started in this session.
    pub fn total_draws(&self) -> u64 {
        self.total_draws
    }

    /// All outcomes of this session, oldest first.
    pub fn history(&self) -> &[DrawOutcome] {
        &self.history
    }

    /// The most recent outcome, if any.
    pub fn last_outcome(&self) -> Option<&DrawOutcome> {
        self.history.last()
    }

    /// Advance the counters at the start of a draw.
    ///
    /// Increments `total_draws` and `pity_count`, and `exchange_points` when
    /// `tracks_exchange_points` is set.
    pub fn begin_draw(&mut self, tracks_exchange_points: bool) {
        self.total_draws += 1;
        self.pity_count = self.pity_count.saturating_add(1);
        if tracks_exchange_points {
            self.exchange_points = self.exchange_points.saturating_add(1);
        }
    }

    /// Append the outcome of the draw started by [`DrawState::begin_draw`].
    pub fn record(&mut self, outcome: DrawOutcome) {
        self.history.push(outcome);
    }

    /// Rewrite the outcome `back` positions from the end (0 = last).
    ///
    /// Used by outcome-shaping passes that run after a batch has been
    /// resolved. Returns false if `back` is out of range.
    pub fn amend_recent(&mut self, back: usize, outcome: DrawOutcome) -> bool {
        let len = self.history.len();
        if back >= len {
            return false;
        }
        self.history[len - 1 - back] = outcome;
        true
    }

    /// Take the recorded outcomes, leaving the history empty.
    ///
    /// Counters are untouched, so long runs can be tallied chunk by chunk
    /// without keeping every outcome.
    pub fn drain_history(&mut self) -> Vec<DrawOutcome> {
        std::mem::take(&mut self.history)
    }
}
