//! One running game: all mutable state lives here, owned by a single value
//! instead of globals, so several games (or tests) can run side by side.

use crate::config::GameConfig;
use crate::falling::{FallingWordField, WordId};
use crate::input::{self, MatchReport};
use crate::render::Renderer;
use crate::rng::WordRng;
use crate::score::ScoreModel;
use crate::spawner::WordSpawner;
use crate::word_bank::{Tier, WordBank};

/// Running counters for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub spawned: u32,
    pub completed: u32,
    pub missed: u32,
    pub keystrokes: u32,
}

pub struct GameSession<R: Renderer> {
    config: GameConfig,
    bank: WordBank,
    score: ScoreModel,
    field: FallingWordField,
    spawner: WordSpawner,
    rng: Box<dyn WordRng>,
    renderer: R,
    stats: SessionStats,
}

impl<R: Renderer> GameSession<R> {
    pub fn new(config: GameConfig, mut renderer: R, rng: Box<dyn WordRng>) -> Self {
        let score = ScoreModel::new(config.tier_threshold);
        renderer.show_score(score.score(), score.current_tier());
        Self {
            bank: WordBank::default(),
            field: FallingWordField::new(config.step, config.lower_bound),
            spawner: WordSpawner::new(config.horizontal_range),
            score,
            rng,
            renderer,
            stats: SessionStats::default(),
            config,
        }
    }

    /// Spawn timer handler.
    pub fn spawn_tick(&mut self) -> WordId {
        self.stats.spawned += 1;
        self.spawner.spawn(
            &self.bank,
            self.score.current_tier(),
            self.rng.as_mut(),
            &mut self.field,
            &mut self.renderer,
        )
    }

    /// Animation timer handler. Returns how many words hit the bottom.
    pub fn animation_tick(&mut self) -> usize {
        let lost = self.field.advance(&mut self.renderer);
        if !lost.is_empty() {
            log::debug!("{} word(s) reached the bottom", lost.len());
        }
        self.stats.missed += lost.len() as u32;
        lost.len()
    }

    /// Keystroke handler.
    pub fn key_press(&mut self, key: char) -> MatchReport {
        self.stats.keystrokes += 1;
        let report = input::key_press(key, &mut self.field, &mut self.score, &mut self.renderer);
        self.stats.completed += report.completed.len() as u32;
        report
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn tier(&self) -> Tier {
        self.score.current_tier()
    }

    pub fn field(&self) -> &FallingWordField {
        &self.field
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}
