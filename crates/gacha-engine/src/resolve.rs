//! Single draw resolution.
//!
//! [`resolve_draw`] is the only place draw state is mutated. Callers must
//! hold an initialized [`DrawState`] and [`GameConfig`] for the session;
//! every call runs to completion and appends exactly one outcome.

use gacha_core::{DrawOutcome, DrawState, GameConfig, PickupPolicy};
use tracing::{debug, trace};

use crate::random::RandomSource;
use crate::rate::effective_ssr_rate;

/// Resolve one draw, updating pity counters and pickup guarantees in place.
///
/// One sample decides the rarity. Pickup classification may consume a
/// second, independent sample depending on the config's [`PickupPolicy`].
pub fn resolve_draw<R>(state: &mut DrawState, config: &GameConfig, rng: &mut R) -> DrawOutcome
where
    R: RandomSource + ?Sized,
{
    state.begin_draw(config.tracks_exchange_points);

    let rate = effective_ssr_rate(state, config);
    let is_hard_pity = config.has_hard_pity() && state.pity_count >= config.hard_pity_threshold;
    let u = rng.next_unit();

    let outcome = if u < rate {
        let is_pickup = resolve_pickup(state, config, rng, u, is_hard_pity);
        if is_hard_pity {
            debug!(pity = state.pity_count, "hard pity triggered");
        }
        if config.pity_reset_on_any_ssr || is_hard_pity {
            state.pity_count = 0;
        }
        DrawOutcome::ssr(is_pickup, is_hard_pity)
    } else if u < rate + config.sr_rate {
        DrawOutcome::sr()
    } else {
        DrawOutcome::r()
    };

    trace!(
        draw = state.total_draws(),
        rate,
        sample = u,
        rarity = %outcome.rarity,
        pickup = outcome.is_pickup,
        "resolved draw"
    );
    state.record(outcome);
    outcome
}

/// Decide whether an SSR is a pickup. `u` is the sample that produced the SSR.
fn resolve_pickup<R>(
    state: &mut DrawState,
    config: &GameConfig,
    rng: &mut R,
    u: f64,
    is_hard_pity: bool,
) -> bool
where
    R: RandomSource + ?Sized,
{
    match config.pickup_policy {
        PickupPolicy::Always => true,
        // Same sample: pickup is a sub-band of the SSR band.
        PickupPolicy::AbsoluteRate(p) => u < p,
        PickupPolicy::RelativeRate(p) => rng.next_unit() < p,
        PickupPolicy::FiftyFifty => {
            if is_hard_pity || state.guaranteed_pickup {
                if state.guaranteed_pickup {
                    debug!("pickup guarantee consumed");
                }
                state.guaranteed_pickup = false;
                true
            } else if rng.next_unit() < 0.5 {
                true
            } else {
                debug!("lost 50/50, next SSR is a guaranteed pickup");
                state.guaranteed_pickup = true;
                false
            }
        }
    }
}
