//! Multi-draw batches and the ten-pull guarantee.
//!
//! Draws in a batch resolve one at a time in order, since each draw's rate
//! depends on the previous draw's pity update. The ten-pull guarantee is an
//! outcome-shaping pass over the finished batch and never touches pity.

use gacha_core::{DrawOutcome, DrawState, GameConfig, Rarity};
use tracing::debug;

use crate::random::RandomSource;
use crate::resolve::resolve_draw;

/// Minimum batch size for the ten-pull guarantee.
pub const BATCH_GUARANTEE_SIZE: usize = 10;

/// Upgrade the last R to SR if a guaranteed batch contains no SR or better.
///
/// Applies only when `config.ten_pull_guarantee` is set and the batch has at
/// least [`BATCH_GUARANTEE_SIZE`] outcomes. Pickup and pity flags of the
/// upgraded entry are left as they were.
pub fn apply_batch_guarantee(mut outcomes: Vec<DrawOutcome>, config: &GameConfig) -> Vec<DrawOutcome> {
    if let Some(index) = guarantee_index(&outcomes, config) {
        outcomes[index].rarity = Rarity::Sr;
    }
    outcomes
}

/// Resolve `count` draws in order, then apply the ten-pull guarantee.
///
/// An upgraded entry is mirrored into `state.history`, so the history shows
/// the batch as returned.
pub fn draw_batch<R>(
    state: &mut DrawState,
    config: &GameConfig,
    rng: &mut R,
    count: usize,
) -> Vec<DrawOutcome>
where
    R: RandomSource + ?Sized,
{
    let mut outcomes: Vec<DrawOutcome> = (0..count)
        .map(|_| resolve_draw(state, config, rng))
        .collect();

    if let Some(index) = guarantee_index(&outcomes, config) {
        outcomes[index].rarity = Rarity::Sr;
        state.amend_recent(count - 1 - index, outcomes[index]);
        debug!(position = index + 1, "batch guarantee upgraded R to SR");
    }

    outcomes
}

fn guarantee_index(outcomes: &[DrawOutcome], config: &GameConfig) -> Option<usize> {
    if !config.ten_pull_guarantee || outcomes.len() < BATCH_GUARANTEE_SIZE {
        return None;
    }
    if outcomes.iter().any(|o| o.rarity.is_sr_or_higher()) {
        return None;
    }
    outcomes.iter().rposition(|o| o.rarity == Rarity::R)
}
