//! Core types for the gacha simulator.
//!
//! This crate defines the data model the draw engine operates on. It has no
//! notion of randomness or rendering: a [`GameConfig`] describes a banner,
//! a [`DrawState`] tracks one session's pity counters, and a
//! [`DrawOutcome`] is the value produced by a single draw.

/// Declarative banner configuration (rates, pity, pickup policy).
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Rarity tiers.
pub mod rarity;
/// Mutable per-session draw state and draw outcomes.
pub mod state;

/// Re-export configuration types.
pub use config::{GameConfig, PickupPolicy, RateStep, SoftPity, SoftPityCurve};
/// Re-export error types.
pub use error::{GachaError, GachaResult};
/// Re-export the rarity tier.
pub use rarity::Rarity;
/// Re-export state types.
pub use state::{DrawOutcome, DrawState};
