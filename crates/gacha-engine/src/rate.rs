//! Effective SSR rate calculation.
//!
//! Rules apply in a fixed order, each later rule overriding the earlier:
//! base rate, soft pity bonus, rate table, hard pity. The result is clamped
//! to `[0, 1]`. Nothing here mutates state, so the rate can be queried for
//! display as often as needed.

use gacha_core::{DrawState, GachaError, GachaResult, GameConfig, SoftPity, SoftPityCurve};
use tracing::debug;

/// The SSR rate that applies to a draw at the state's current pity count.
///
/// Misconfigured linear soft pity (hard pity not above the start) degrades
/// to "no soft pity bonus" instead of failing. `validate_config` reports it.
pub fn effective_ssr_rate(state: &DrawState, config: &GameConfig) -> f64 {
    rate_at(state.pity_count, config)
}

/// Like [`effective_ssr_rate`], but reports a misconfigured linear soft pity.
pub fn try_effective_ssr_rate(state: &DrawState, config: &GameConfig) -> GachaResult<f64> {
    compute(state.pity_count, config, true)
}

/// The SSR rate at an arbitrary pity count, e.g. for rate tables.
pub fn rate_at(pity_count: u32, config: &GameConfig) -> f64 {
    match compute(pity_count, config, false) {
        Ok(rate) => rate,
        // Lenient mode never reports errors.
        Err(_) => config.base_ssr_rate.clamp(0.0, 1.0),
    }
}

fn compute(pity_count: u32, config: &GameConfig, strict: bool) -> GachaResult<f64> {
    let mut rate = config.base_ssr_rate;

    if let Some(soft) = &config.soft_pity {
        if pity_count >= soft.start_count {
            match soft_pity_bonus(pity_count, soft, config) {
                Ok(bonus) => rate += bonus,
                Err(e) if strict => return Err(e),
                // Reported once by validation; this runs on every draw.
                Err(e) => debug!(%e, "ignoring soft pity"),
            }
        }
    }

    // Last matching step wins, in listed order.
    for step in &config.rate_steps {
        if pity_count >= step.after_count {
            rate = step.ssr_rate;
        }
    }

    if config.has_hard_pity() && pity_count >= config.hard_pity_threshold {
        rate = 1.0;
    }

    Ok(clamp_rate(rate))
}

/// Bonus added on top of the base rate. Caller guarantees `pity_count >= start_count`.
fn soft_pity_bonus(pity_count: u32, soft: &SoftPity, config: &GameConfig) -> GachaResult<f64> {
    let into_soft_pity = f64::from(pity_count - soft.start_count + 1);
    match soft.curve {
        SoftPityCurve::Additive => Ok(into_soft_pity * soft.increment),
        SoftPityCurve::Linear => {
            if config.hard_pity_threshold <= soft.start_count {
                return Err(GachaError::InvalidSoftPitySpan {
                    start: soft.start_count,
                    hard_pity: config.hard_pity_threshold,
                });
            }
            let span = f64::from(config.hard_pity_threshold - soft.start_count + 1);
            Ok((1.0 - config.base_ssr_rate) * (into_soft_pity / span))
        }
    }
}

fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gacha_core::RateStep;
    use proptest::prelude::*;

    fn at(pity_count: u32, config: &GameConfig) -> f64 {
        let state = {
            let mut s = DrawState::new();
            s.pity_count = pity_count;
            s
        };
        effective_ssr_rate(&state, config)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn base_rate_when_pity_low() {
        let config = GameConfig::new(0.01, 0.05);
        assert!(close(at(0, &config), 0.01));
    }

    #[test]
    fn additive_soft_pity() {
        let config = GameConfig::new(0.01, 0.05).with_soft_pity(SoftPity::additive(51, 0.02));
        assert!(close(at(50, &config), 0.01));
        assert!(close(at(51, &config), 0.03));
        assert!(close(at(52, &config), 0.05));
    }

    #[test]
    fn linear_soft_pity_reaches_one_at_hard_pity() {
        let config = GameConfig::new(0.006, 0.051)
            .with_hard_pity(90)
            .with_soft_pity(SoftPity::linear(74));
        assert!(close(at(73, &config), 0.006));
        let expected = 0.006 + (1.0 - 0.006) * (1.0 / 17.0);
        assert!(close(at(74, &config), expected));
        assert!(at(89, &config) < 1.0);
        assert!(close(at(90, &config), 1.0));
    }

    #[test]
    fn linear_soft_pity_without_span_is_config_error() {
        let config = GameConfig::new(0.01, 0.05).with_soft_pity(SoftPity::linear(74));
        let state = {
            let mut s = DrawState::new();
            s.pity_count = 80;
            s
        };
        assert!(matches!(
            try_effective_ssr_rate(&state, &config),
            Err(GachaError::InvalidSoftPitySpan {
                start: 74,
                hard_pity: 0
            })
        ));
        // The lenient calculator keeps running on the base rate.
        assert!(close(effective_ssr_rate(&state, &config), 0.01));
    }

    #[test]
    fn linear_soft_pity_with_equal_threshold_is_config_error() {
        let config = GameConfig::new(0.01, 0.05)
            .with_hard_pity(74)
            .with_soft_pity(SoftPity::linear(74));
        let state = {
            let mut s = DrawState::new();
            s.pity_count = 74;
            s
        };
        assert!(try_effective_ssr_rate(&state, &config).is_err());
        // Hard pity still forces the rate.
        assert!(close(effective_ssr_rate(&state, &config), 1.0));
    }

    #[test]
    fn rate_step_applies_when_reached() {
        let config = GameConfig::new(0.01, 0.05)
            .with_rate_steps(vec![RateStep::new(74, 0.5), RateStep::new(76, 0.8)]);
        assert!(close(at(73, &config), 0.01));
        assert!(close(at(75, &config), 0.5));
    }

    #[test]
    fn last_matching_rate_step_wins() {
        let config = GameConfig::new(0.01, 0.05)
            .with_rate_steps(vec![RateStep::new(74, 0.5), RateStep::new(76, 0.8)]);
        assert!(close(at(77, &config), 0.8));
    }

    #[test]
    fn unsorted_rate_steps_use_listed_order() {
        let config = GameConfig::new(0.01, 0.05)
            .with_rate_steps(vec![RateStep::new(76, 0.8), RateStep::new(74, 0.5)]);
        assert!(close(at(77, &config), 0.5));
    }

    #[test]
    fn rate_steps_override_soft_pity() {
        let config = GameConfig::new(0.01, 0.05)
            .with_soft_pity(SoftPity::additive(10, 0.1))
            .with_rate_steps(vec![RateStep::new(12, 0.02)]);
        assert!(close(at(11, &config), 0.21));
        assert!(close(at(12, &config), 0.02));
    }

    #[test]
    fn hard_pity_overrides_rate_steps() {
        let config = GameConfig::new(0.01, 0.05)
            .with_hard_pity(100)
            .with_rate_steps(vec![RateStep::new(99, 0.5)]);
        assert!(close(at(99, &config), 0.5));
        assert!(close(at(100, &config), 1.0));
    }

    /// Captures formatted log output for the duration of a closure.
    fn captured_logs(level: tracing::Level, f: impl FnOnce()) -> String {
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct Buffer(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for Buffer {
            fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(bytes);
                Ok(bytes.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buffer = Buffer(Arc::new(Mutex::new(Vec::new())));
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn degraded_linear_soft_pity_stays_quiet_at_warn() {
        let config = GameConfig::new(0.01, 0.05).with_soft_pity(SoftPity::linear(74));
        let query_range = || {
            for pity in 70..100 {
                rate_at(pity, &config);
            }
        };
        assert!(captured_logs(tracing::Level::WARN, query_range).is_empty());
        assert!(captured_logs(tracing::Level::DEBUG, query_range).contains("ignoring soft pity"));
    }

    #[test]
    fn zero_threshold_means_no_hard_pity() {
        let config = GameConfig::new(0.03, 0.18);
        assert!(close(at(10_000, &config), 0.03));
    }

    #[test]
    fn clamps_out_of_range_results() {
        let config = GameConfig::new(0.01, 0.05)
            .with_soft_pity(SoftPity::additive(1, 0.5))
            .with_rate_steps(vec![]);
        assert!(close(at(10, &config), 1.0));

        let negative = GameConfig::new(0.01, 0.05).with_rate_steps(vec![RateStep::new(5, -0.3)]);
        assert!(close(at(5, &negative), 0.0));
    }

    #[test]
    fn rate_at_matches_state_query() {
        let config = GameConfig::new(0.006, 0.051)
            .with_hard_pity(90)
            .with_soft_pity(SoftPity::additive(74, 0.06));
        for pity in [0, 73, 74, 80, 90] {
            assert!(close(rate_at(pity, &config), at(pity, &config)));
        }
    }

    proptest! {
        #[test]
        fn rate_is_always_a_probability(
            base in -1.0f64..2.0,
            start in 0u32..200,
            increment in -0.5f64..0.5,
            hard in 0u32..200,
            step_rate in -1.0f64..2.0,
            pity in 0u32..400,
        ) {
            let config = GameConfig::new(base, 0.1)
                .with_hard_pity(hard)
                .with_soft_pity(SoftPity::additive(start, increment))
                .with_rate_steps(vec![RateStep::new(start / 2, step_rate)]);
            let rate = at(pity, &config);
            prop_assert!((0.0..=1.0).contains(&rate));
        }

        #[test]
        fn rate_query_is_idempotent(pity in 0u32..200, start in 1u32..100) {
            let config = GameConfig::new(0.006, 0.051)
                .with_hard_pity(start + 50)
                .with_soft_pity(SoftPity::linear(start));
            let state = { let mut s = DrawState::new(); s.pity_count = pity; s };
            let first = effective_ssr_rate(&state, &config);
            let second = effective_ssr_rate(&state, &config);
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }

        #[test]
        fn hard_pity_always_forces_one(hard in 1u32..300, extra in 0u32..50, step_rate in 0.0f64..1.0) {
            let config = GameConfig::new(0.01, 0.05)
                .with_hard_pity(hard)
                .with_rate_steps(vec![RateStep::new(hard.saturating_sub(1), step_rate)]);
            prop_assert!(close(at(hard + extra, &config), 1.0));
        }
    }
}
