//! Pre-configured banner profiles.
//!
//! Each function returns the [`Profile`] for one banner style. The
//! [`all`] list fixes the display order used by the built-in catalog.

use gacha_core::{GameConfig, PickupPolicy, RateStep, SoftPity};

use crate::custom::CustomSettings;
use crate::profile::{PityKind, Profile};

/// Low base rate with a long ceiling and an absolute pickup band.
///
/// 1% SSR, of which 0.8% is the pickup band. An SSR is forced at 330.
pub fn game_a() -> Profile {
    Profile::new(
        "game_a",
        "Tale of Fate",
        PityKind::Direct,
        GameConfig::new(0.01, 0.03)
            .with_hard_pity(330)
            .with_pickup(PickupPolicy::AbsoluteRate(0.008))
            .with_ten_pull_guarantee(true),
    )
    .with_description("An SSR is guaranteed within 330 draws.")
}

/// Linear soft pity from 74 reaching certainty at 90, with a 50/50 pickup.
pub fn game_b() -> Profile {
    Profile::new(
        "game_b",
        "Elemental Reactions",
        PityKind::Direct,
        GameConfig::new(0.006, 0.051)
            .with_hard_pity(90)
            .with_soft_pity(SoftPity::linear(74))
            .with_pickup(PickupPolicy::FiftyFifty)
            .with_ten_pull_guarantee(true),
    )
    .with_description(
        "SSR guaranteed at 90, rising from 74. Losing the 50/50 makes the next SSR a pickup.",
    )
}

/// No ceiling; exchange points can be traded for the pickup at 200.
///
/// Random SSRs do not reset the pity counter.
pub fn game_c() -> Profile {
    Profile::new(
        "game_c",
        "Derby Trainer",
        PityKind::Exchange,
        GameConfig::new(0.03, 0.18)
            .with_exchange_points(true)
            .with_pity_reset_on_any_ssr(false)
            .with_pickup(PickupPolicy::RelativeRate(0.5))
            .with_ten_pull_guarantee(true),
    )
    .with_exchange_cost(200)
    .with_description("200 draws earn 200 exchange points, tradeable for the pickup.")
}

/// Like [`game_c`] with a lower base rate.
pub fn game_d() -> Profile {
    Profile::new(
        "game_d",
        "Idol Stage",
        PityKind::Exchange,
        GameConfig::new(0.025, 0.18)
            .with_exchange_points(true)
            .with_pickup(PickupPolicy::RelativeRate(0.5))
            .with_ten_pull_guarantee(true),
    )
    .with_exchange_cost(200)
    .with_description("200 draws earn 200 exchange points, tradeable for the pickup.")
}

/// Additive soft pity (+2% per draw from 51) plus exchange at 300.
pub fn game_e() -> Profile {
    Profile::new(
        "game_e",
        "Tower Defense",
        PityKind::Exchange,
        GameConfig::new(0.02, 0.08)
            .with_soft_pity(SoftPity::additive(51, 0.02))
            .with_exchange_points(true)
            .with_pickup(PickupPolicy::RelativeRate(0.5)),
    )
    .with_exchange_cost(300)
    .with_description("Exchange at 300. From draw 51 the SSR rate rises by 2% per draw.")
}

/// Exchange at 300 with no ceiling; random SSRs keep the pity counter.
pub fn game_f() -> Profile {
    Profile::new(
        "game_f",
        "Pocket Monsters",
        PityKind::Exchange,
        GameConfig::new(0.03, 0.15)
            .with_exchange_points(true)
            .with_pity_reset_on_any_ssr(false)
            .with_pickup(PickupPolicy::RelativeRate(0.5))
            .with_ten_pull_guarantee(true),
    )
    .with_exchange_cost(300)
    .with_description("300 draws earn 300 exchange points, tradeable for the pickup.")
}

/// Soft pity written as a rate table: +6% per draw from 6.6% at 74.
pub fn game_g() -> Profile {
    let steps = (0..16)
        .map(|i| RateStep::new(74 + i, 0.066 + 0.06 * f64::from(i)))
        .collect();
    Profile::new(
        "game_g",
        "Studio H",
        PityKind::Direct,
        GameConfig::new(0.006, 0.051)
            .with_hard_pity(90)
            .with_rate_steps(steps)
            .with_pickup(PickupPolicy::FiftyFifty)
            .with_ten_pull_guarantee(true),
    )
    .with_description(
        "SSR guaranteed at 90, rising from 74. Losing the 50/50 makes the next SSR a pickup.",
    )
}

/// Additive soft pity (+6% per draw from 74), hard pity at 90, 50/50 pickup.
pub fn pity_gacha() -> Profile {
    Profile::new(
        "pity_gacha",
        "Pity Banner",
        PityKind::Direct,
        GameConfig::new(0.006, 0.051)
            .with_hard_pity(90)
            .with_soft_pity(SoftPity::additive(74, 0.06))
            .with_pickup(PickupPolicy::FiftyFifty)
            .with_ten_pull_guarantee(true),
    )
    .with_description(
        "From draw 74 the SSR rate rises; 90 guarantees an SSR. \
         A lost 50/50 makes the next SSR a pickup.",
    )
}

/// Step-wise rate increases every ten draws, certain at 100.
pub fn dynamic_rate() -> Profile {
    Profile::new(
        "dynamic_rate",
        "Dynamic Rate",
        PityKind::Direct,
        GameConfig::new(0.01, 0.10).with_hard_pity(100).with_rate_steps(vec![
            RateStep::new(10, 0.02),
            RateStep::new(20, 0.03),
            RateStep::new(30, 0.05),
            RateStep::new(40, 0.10),
            RateStep::new(50, 0.20),
            RateStep::new(90, 0.50),
        ]),
    )
    .with_description("The SSR rate rises every ten draws; 100 guarantees an SSR.")
}

/// All presets in display order, ending with the default custom profile.
pub fn all() -> Vec<Profile> {
    vec![
        game_a(),
        game_b(),
        game_c(),
        game_d(),
        game_e(),
        game_f(),
        game_g(),
        pity_gacha(),
        dynamic_rate(),
        CustomSettings::default().into_profile(),
    ]
}
