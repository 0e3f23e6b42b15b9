//! Pull-resolution engine for the gacha simulator.
//!
//! The engine consumes a `(DrawState, GameConfig)` pair and an injected
//! uniform random source, and produces [`DrawOutcome`] values while updating
//! pity counters and pickup guarantees. It performs no I/O and knows nothing
//! about rendering.
//!
//! - [`rate`]: pure effective-SSR-rate calculation
//! - [`resolve`]: single draw resolution
//! - [`batch`]: multi-draw batches and the ten-pull guarantee
//! - [`validate`]: best-effort configuration diagnostics
//!
//! [`DrawOutcome`]: gacha_core::DrawOutcome

pub mod batch;
pub mod random;
pub mod rate;
pub mod resolve;
pub mod validate;

pub use batch::{BATCH_GUARANTEE_SIZE, apply_batch_guarantee, draw_batch};
pub use random::{FnSource, RandomSource, ScriptedSource};
pub use rate::{effective_ssr_rate, rate_at, try_effective_ssr_rate};
pub use resolve::resolve_draw;
pub use validate::{Severity, ValidationIssue, validate_config};
