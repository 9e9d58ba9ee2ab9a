//! Score and tier tracking.

use crate::word_bank::Tier;

/// Score plus the tier derived from it.
///
/// The tier moves up one level each time the score reaches the next
/// `threshold * (tier + 1)` mark, and never past [`Tier::MAX`].
#[derive(Clone, Debug)]
pub struct ScoreModel {
    score: u32,
    tier: Tier,
    threshold: u32,
}

impl Default for ScoreModel {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ScoreModel {
    pub fn new(threshold: u32) -> Self {
        Self {
            score: 0,
            tier: Tier::MIN,
            threshold,
        }
    }

    /// Adds `points` to the score. Returns the new tier if it went up.
    pub fn award_points(&mut self, points: u32) -> Option<Tier> {
        self.score = self.score.saturating_add(points);
        log::info!("score {}", self.score);

        let next_mark = self.threshold.saturating_mul(self.tier.value() as u32 + 1);
        if self.score < next_mark {
            return None;
        }
        let raised = self.tier.raised()?;
        self.tier = raised;
        log::info!("tier up to {}", raised);
        Some(raised)
    }

    /// Drops one tier, stopping at tier 0. No game event calls this yet.
    pub fn lower_tier(&mut self) -> Tier {
        self.tier = self.tier.lowered();
        self.tier
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_tier(&self) -> Tier {
        self.tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_rises_at_ten_points() {
        let mut model = ScoreModel::default();
        assert_eq!(model.award_points(4), None);
        assert_eq!((model.score(), model.current_tier().value()), (4, 0));
        assert_eq!(model.award_points(6), Tier::new(1));
        assert_eq!((model.score(), model.current_tier().value()), (10, 1));
    }

    #[test]
    fn tier_moves_one_step_per_award() {
        let mut model = ScoreModel::default();
        // 25 points crosses both marks but only one step is taken per award.
        assert_eq!(model.award_points(25), Tier::new(1));
        assert_eq!(model.award_points(1), Tier::new(2));
        assert_eq!(model.current_tier(), Tier::MAX);
    }

    #[test]
    fn tier_caps_at_two() {
        let mut model = ScoreModel::default();
        for _ in 0..20 {
            model.award_points(4);
        }
        assert_eq!(model.score(), 80);
        assert_eq!(model.current_tier(), Tier::MAX);
    }

    #[test]
    fn lower_tier_saturates() {
        let mut model = ScoreModel::default();
        model.award_points(10);
        assert_eq!(model.lower_tier(), Tier::MIN);
        assert_eq!(model.lower_tier(), Tier::MIN);
        // Score is untouched by tier changes.
        assert_eq!(model.score(), 10);
    }
}
