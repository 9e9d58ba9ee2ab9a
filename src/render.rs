//! Display collaborator. The game core only talks to the screen through
//! [`Renderer`], so everything else runs headless in tests.

use crate::falling::{FallingWord, WordId};
use crate::word_bank::Tier;

pub trait Renderer {
    /// A new word appeared at the top with nothing typed yet.
    fn spawn(&mut self, id: WordId, word: &FallingWord);
    /// The typed / remaining split of a word changed.
    fn update_progress(&mut self, id: WordId, word: &FallingWord);
    /// A word moved down.
    fn advance(&mut self, id: WordId, word: &FallingWord);
    /// A word left the field, either completed or lost at the bottom.
    fn remove(&mut self, id: WordId, word: &FallingWord);
    fn show_score(&mut self, _score: u32, _tier: Tier) {}
}

/// Renderer that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn spawn(&mut self, _id: WordId, _word: &FallingWord) {}
    fn update_progress(&mut self, _id: WordId, _word: &FallingWord) {}
    fn advance(&mut self, _id: WordId, _word: &FallingWord) {}
    fn remove(&mut self, _id: WordId, _word: &FallingWord) {}
}
