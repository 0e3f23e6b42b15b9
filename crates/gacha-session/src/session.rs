//! Gacha session management.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use gacha_catalog::{Catalog, Profile};
use gacha_core::{DrawOutcome, DrawState, GameConfig, Rarity};
use gacha_engine::{draw_batch, rate_at};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::stats::Statistics;

/// One pull request: the outcomes of a single `draw` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pull {
    /// 1-based position in the session's pull log.
    pub index: usize,
    /// Outcomes in draw order, after the ten-pull guarantee.
    pub outcomes: Vec<DrawOutcome>,
}

impl Pull {
    /// The best rarity in this pull.
    pub fn highest(&self) -> Option<Rarity> {
        self.outcomes.iter().map(|o| o.rarity).max()
    }
}

/// Serializable view of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Id of the active profile.
    pub profile_id: String,
    /// Seed the session was started with.
    pub seed: u64,
    /// Draw state after the last pull.
    pub state: DrawState,
    /// All pulls since the last reset.
    pub pulls: Vec<Pull>,
    /// Statistics over all draws since the last reset.
    pub stats: Statistics,
}

/// An interactive gacha session for one profile.
pub struct Session {
    profile: Profile,
    config: SessionConfig,
    state: DrawState,
    pulls: Vec<Pull>,
    rng: StdRng,
}

impl Session {
    /// Start a session with a fresh draw state.
    pub fn new(profile: Profile, config: SessionConfig) -> Self {
        info!(profile = %profile.id, seed = config.seed, "session created");
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            profile,
            config,
            state: DrawState::new(),
            pulls: Vec::new(),
            rng,
        }
    }

    /// Start a session for a profile looked up by id.
    pub fn from_catalog(catalog: &Catalog, id: &str, config: SessionConfig) -> SessionResult<Self> {
        let profile = catalog.require(id)?.clone();
        Ok(Self::new(profile, config))
    }

    /// Draw `count` times as one pull and log it.
    pub fn draw(&mut self, count: u32) -> SessionResult<&Pull> {
        if count == 0 {
            return Err(SessionError::InvalidDrawCount(count));
        }
        let outcomes = draw_batch(
            &mut self.state,
            &self.profile.config,
            &mut self.rng,
            count as usize,
        );
        let index = self.pulls.len() + 1;
        debug!(
            index,
            count,
            pity = self.state.pity_count,
            "pull complete"
        );
        self.pulls.push(Pull { index, outcomes });
        Ok(&self.pulls[index - 1])
    }

    /// Draw once.
    pub fn draw_single(&mut self) -> SessionResult<&Pull> {
        self.draw(1)
    }

    /// Draw ten times in one pull.
    pub fn draw_ten(&mut self) -> SessionResult<&Pull> {
        self.draw(10)
    }

    /// Discard all draws and reseed, so the session replays identically.
    pub fn reset(&mut self) {
        info!(profile = %self.profile.id, "session reset");
        self.state = DrawState::new();
        self.pulls.clear();
        self.rng = StdRng::seed_from_u64(self.config.seed);
    }

    /// Replace the profile and start over with a fresh state.
    pub fn switch_profile(&mut self, profile: Profile) {
        info!(from = %self.profile.id, to = %profile.id, "profile switched");
        self.profile = profile;
        self.state = DrawState::new();
        self.pulls.clear();
        self.rng = StdRng::seed_from_u64(self.config.seed);
    }

    /// The active profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The active game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.profile.config
    }

    /// The session configuration.
    pub fn session_config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current draw state.
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// All pulls since the last reset.
    pub fn pulls(&self) -> &[Pull] {
        &self.pulls
    }

    /// SSR rate the next draw will use.
    pub fn current_rate(&self) -> f64 {
        rate_at(self.state.pity_count.saturating_add(1), &self.profile.config)
    }

    /// Whether the next SSR is a guaranteed pickup.
    pub fn guaranteed_pickup(&self) -> bool {
        self.state.guaranteed_pickup
    }

    /// Statistics over all draws since the last reset.
    pub fn stats(&self) -> Statistics {
        Statistics::from_outcomes(self.state.history())
    }

    /// Capture the session for export.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            profile_id: self.profile.id.clone(),
            seed: self.config.seed,
            state: self.state.clone(),
            pulls: self.pulls.clone(),
            stats: self.stats(),
        }
    }

    /// Export the session as pretty-printed JSON.
    pub fn export_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
