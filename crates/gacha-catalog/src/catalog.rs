//! Ordered collection of profiles.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CatalogError, CatalogResult};
use crate::preset;
use crate::profile::Profile;

/// On-disk shape of a profile file.
#[derive(Serialize, Deserialize)]
struct ProfileFile {
    profiles: Vec<Profile>,
}

/// Profiles in a fixed display order, unique by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<Profile>,
}

impl Catalog {
    /// The built-in presets, ending with the default custom profile.
    pub fn builtin() -> Self {
        Self {
            profiles: preset::all(),
        }
    }

    /// Build a catalog from profiles, keeping their order.
    pub fn from_profiles(profiles: Vec<Profile>) -> CatalogResult<Self> {
        if profiles.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, profile) in profiles.iter().enumerate() {
            if profiles[..i].iter().any(|p| p.id == profile.id) {
                return Err(CatalogError::DuplicateProfile(profile.id.clone()));
            }
        }
        Ok(Self { profiles })
    }

    /// Look up a profile by id.
    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Look up a profile by id, failing if it is missing.
    pub fn require(&self, id: &str) -> CatalogResult<&Profile> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownProfile(id.to_string()))
    }

    /// Iterate in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    /// Profile ids in display order.
    pub fn ids(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.id.as_str()).collect()
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Serialize as a profile file.
    pub fn to_json(&self) -> CatalogResult<String> {
        let file = ProfileFile {
            profiles: self.profiles.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

/// Parse a `{ "profiles": [...] }` document.
///
/// Validation issues are logged but do not fail the load.
pub fn parse_profiles(source: &str) -> CatalogResult<Catalog> {
    let file: ProfileFile = serde_json::from_str(source)?;
    for profile in &file.profiles {
        for issue in profile.issues() {
            warn!(profile = %profile.id, "{issue}");
        }
    }
    Catalog::from_profiles(file.profiles)
}

/// Read and parse a profile file.
pub fn load_profiles(path: &Path) -> CatalogResult<Catalog> {
    let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_profiles(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PityKind;
    use gacha_core::GameConfig;
    use std::io::Write;

    fn profile(id: &str) -> Profile {
        Profile::new(id, id, PityKind::None, GameConfig::new(0.03, 0.18))
    }

    #[test]
    fn builtin_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.ids(),
            vec![
                "game_a",
                "game_b",
                "game_c",
                "game_d",
                "game_e",
                "game_f",
                "game_g",
                "pity_gacha",
                "dynamic_rate",
                "custom"
            ]
        );
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("game_b").unwrap().config.hard_pity_threshold, 90);
        assert!(catalog.get("nope").is_none());
        assert!(matches!(
            catalog.require("nope"),
            Err(CatalogError::UnknownProfile(id)) if id == "nope"
        ));
    }

    #[test]
    fn duplicates_rejected() {
        let err = Catalog::from_profiles(vec![profile("a"), profile("b"), profile("a")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProfile(id) if id == "a"));
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(
            Catalog::from_profiles(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().unwrap();
        let reparsed = parse_profiles(&json).unwrap();
        assert_eq!(reparsed.ids(), catalog.ids());
        let g = reparsed.get("game_g").unwrap();
        assert_eq!(g.config.rate_steps.len(), 16);
        assert_eq!(g.config.pickup_policy, catalog.get("game_g").unwrap().config.pickup_policy);
    }

    #[test]
    fn parse_minimal_file() {
        let catalog = parse_profiles(
            r#"{ "profiles": [
                { "id": "mine", "name": "Mine", "pity_kind": "direct",
                  "config": { "base_ssr_rate": 0.02, "sr_rate": 0.1, "hard_pity_threshold": 50 } }
            ] }"#,
        )
        .unwrap();
        assert_eq!(catalog.ids(), vec!["mine"]);
        assert!(catalog.get("mine").unwrap().config.pity_reset_on_any_ssr);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(parse_profiles("not json"), Err(CatalogError::Parse(_))));
        assert!(matches!(
            parse_profiles(r#"{ "profiles": [] }"#),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn invalid_config_still_loads() {
        let catalog = parse_profiles(
            r#"{ "profiles": [
                { "id": "bad", "name": "Bad", "pity_kind": "none",
                  "config": { "base_ssr_rate": 1.5, "sr_rate": 0.1 } }
            ] }"#,
        )
        .unwrap();
        assert!(catalog.get("bad").unwrap().issues().iter().any(|i| i.is_error()));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", Catalog::builtin().to_json().unwrap()).unwrap();
        let catalog = load_profiles(file.path()).unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(load_profiles(&path), Err(CatalogError::Io { .. })));
    }
}
