//! Word candidates grouped by difficulty tier.
//!
//! Tier 0 drills the home-row index fingers (`f`, `j`) plus the keys right
//! above and below them, tier 1 adds short syllables and tier 2 full words.

use std::fmt;

/// Difficulty level selecting which word group is sampled. Always 0, 1 or 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

impl Tier {
    pub const MIN: Tier = Tier(0);
    pub const MAX: Tier = Tier(2);

    /// Returns `None` for anything past [`Tier::MAX`].
    pub fn new(level: u8) -> Option<Tier> {
        (level <= Self::MAX.0).then_some(Tier(level))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Next tier up, or `None` when already at the top.
    pub fn raised(self) -> Option<Tier> {
        Tier::new(self.0 + 1)
    }

    /// Next tier down, saturating at tier 0.
    pub fn lowered(self) -> Tier {
        Tier(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const TIER0_WORDS: &[&str] = &["ju", "fr", "fv", "jm", "fu", "jr", "jv", "fm"];
pub const TIER1_WORDS: &[&str] = &["fre", "jui", "fui", "vie", "mil", "mery", "huy"];
pub const TIER2_WORDS: &[&str] = &["juan", "remo", "foca", "dedo", "cate"];

/// Static lookup of word candidates, indexed by [`Tier`].
#[derive(Clone, Copy, Debug)]
pub struct WordBank {
    tiers: [&'static [&'static str]; 3],
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            tiers: [TIER0_WORDS, TIER1_WORDS, TIER2_WORDS],
        }
    }
}

impl WordBank {
    pub fn words_for_tier(&self, tier: Tier) -> &'static [&'static str] {
        self.tiers[tier.index()]
    }

    pub fn tiers(&self) -> impl Iterator<Item = (Tier, &'static [&'static str])> + '_ {
        self.tiers
            .iter()
            .enumerate()
            .map(|(i, words)| (Tier(i as u8), *words))
    }
}
