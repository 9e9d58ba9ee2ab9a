//! Game tuning. Defaults reproduce the classic MecaTRON-3000 pacing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Milliseconds between two new words.
    pub spawn_period_ms: u32,
    /// Milliseconds between two animation steps.
    pub tick_period_ms: u32,
    /// Pixels a word falls per animation step.
    pub step: u32,
    /// Words at or below this height are lost.
    pub lower_bound: u32,
    /// Words spawn at a random left offset in `0..horizontal_range` percent.
    pub horizontal_range: u32,
    /// Points between tiers.
    pub tier_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_period_ms: 3000,
            tick_period_ms: 300,
            step: 5,
            lower_bound: 760,
            horizontal_range: 85,
            tier_threshold: 10,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let fields = [
            ("spawn_period_ms", self.spawn_period_ms),
            ("tick_period_ms", self.tick_period_ms),
            ("step", self.step),
            ("lower_bound", self.lower_bound),
            ("horizontal_range", self.horizontal_range),
            ("tier_threshold", self.tier_threshold),
        ];
        match fields.iter().find(|(_, v)| *v == 0) {
            Some((name, _)) => Err(GameError::InvalidConfig(format!("{name} must be > 0"))),
            None => Ok(()),
        }
    }

    /// Parses a (possibly partial) JSON object; missing fields keep their
    /// defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of animation ticks a word survives before reaching the bottom.
    pub fn ticks_to_bottom(&self) -> u32 {
        self.lower_bound.div_ceil(self.step).saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ticks_to_bottom(), 151);
    }

    #[test]
    fn zero_values_are_rejected() {
        let config = GameConfig {
            step: 0,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("step"));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{"spawn_period_ms": 1500}"#).unwrap();
        assert_eq!(config.spawn_period_ms, 1500);
        assert_eq!(config.lower_bound, 760);
        assert!(GameConfig::from_json(r#"{"tick_period_ms": 0}"#).is_err());
        assert!(GameConfig::from_json("not json").is_err());
    }
}
