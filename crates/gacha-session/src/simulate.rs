//! Long Monte Carlo runs that keep only running statistics.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use gacha_core::{DrawState, GameConfig};
use gacha_engine::draw_batch;

use crate::error::{SessionError, SessionResult};
use crate::stats::Statistics;

/// Run `draws` draws in pulls of `batch` and tally them.
///
/// Draws the same outcomes as a [`Session`](crate::Session) with the same
/// seed making the same pulls, but memory stays flat: each pull is folded
/// into the statistics and dropped. A final short pull covers any remainder.
pub fn simulate(config: &GameConfig, draws: u64, batch: u32, seed: u64) -> SessionResult<Statistics> {
    if batch == 0 {
        return Err(SessionError::InvalidDrawCount(batch));
    }
    let mut state = DrawState::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = Statistics::default();

    let mut remaining = draws;
    while remaining > 0 {
        let count = remaining.min(u64::from(batch));
        draw_batch(&mut state, config, &mut rng, count as usize);
        stats.extend(&state.drain_history());
        remaining -= count;
    }

    info!(draws, ssr = stats.ssr, "simulation finished");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Session, SessionConfig};
    use gacha_catalog::preset;

    #[test]
    fn matches_session_with_same_pulls() {
        let profile = preset::pity_gacha();
        let stats = simulate(&profile.config, 995, 10, 7).unwrap();

        let mut session = Session::new(profile, SessionConfig::default().with_seed(7));
        for _ in 0..99 {
            session.draw_ten().unwrap();
        }
        session.draw(5).unwrap();
        assert_eq!(stats, session.stats());
        assert_eq!(stats.total, 995);
    }

    #[test]
    fn drought_spans_pull_boundaries() {
        let config = GameConfig::new(0.0, 0.0).with_hard_pity(25);
        let stats = simulate(&config, 100, 10, 1).unwrap();
        assert_eq!(stats.ssr, 4);
        assert_eq!(stats.hard_pity, 4);
        assert_eq!(stats.longest_ssr_drought, 24);
    }

    #[test]
    fn zero_batch_rejected() {
        let config = GameConfig::new(0.03, 0.18);
        assert!(matches!(
            simulate(&config, 10, 0, 42),
            Err(SessionError::InvalidDrawCount(0))
        ));
    }

    #[test]
    fn zero_draws_is_empty() {
        let config = GameConfig::new(0.03, 0.18);
        assert_eq!(simulate(&config, 0, 10, 42).unwrap(), Statistics::default());
    }
}
