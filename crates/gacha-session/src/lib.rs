//! Stateful gacha sessions.
//!
//! A [`Session`] owns one profile, its draw state, a seeded RNG and the log
//! of pulls made so far. Resetting or switching profile replaces all of it
//! at once, so callers never observe a state from one profile paired with
//! the config of another.

pub mod config;
pub mod error;
pub mod session;
pub mod simulate;
pub mod stats;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use session::{Pull, Session, SessionSnapshot};
pub use simulate::simulate;
pub use stats::Statistics;
