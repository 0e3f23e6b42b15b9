//! Game profile catalog for the gacha simulator.
//!
//! A [`Profile`] pairs a [`gacha_core::GameConfig`] with display metadata.
//! The [`Catalog`] keeps profiles in a fixed display order and can be built
//! from the shipped presets, synthesized custom settings, or a JSON file.

pub mod catalog;
pub mod custom;
pub mod error;
pub mod preset;
pub mod profile;

pub use catalog::{Catalog, load_profiles, parse_profiles};
pub use custom::CustomSettings;
pub use error::{CatalogError, CatalogResult};
pub use profile::{PityKind, Profile};
