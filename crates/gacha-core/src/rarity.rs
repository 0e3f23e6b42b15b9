//! Rarity tiers, from the common `R` up to the rare `SSR`.

use serde::{Deserialize, Serialize};

/// The rarity of a drawn item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    /// Common tier; the implicit remainder of the probability mass.
    #[serde(rename = "R")]
    R,
    /// Rare tier.
    #[serde(rename = "SR")]
    Sr,
    /// Highest tier, subject to pity and pickup rules.
    #[serde(rename = "SSR")]
    Ssr,
}

impl Rarity {
    /// All tiers in ascending order.
    pub fn all() -> [Self; 3] {
        [Self::R, Self::Sr, Self::Ssr]
    }

    /// Returns true for SR and above.
    pub fn is_sr_or_higher(self) -> bool {
        self >= Self::Sr
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::R => write!(f, "R"),
            Self::Sr => write!(f, "SR"),
            Self::Ssr => write!(f, "SSR"),
        }
    }
}
