//! Periodic word generation.

use crate::falling::{FallingWord, FallingWordField, WordId};
use crate::render::Renderer;
use crate::rng::WordRng;
use crate::word_bank::{Tier, WordBank};

/// Draws a random word for the current tier and drops it into the field.
#[derive(Clone, Copy, Debug)]
pub struct WordSpawner {
    horizontal_range: u32,
}

impl Default for WordSpawner {
    fn default() -> Self {
        Self::new(85)
    }
}

impl WordSpawner {
    /// Words are placed at a random percentage in `0..horizontal_range`.
    pub fn new(horizontal_range: u32) -> Self {
        Self { horizontal_range }
    }

    /// Picks the text and horizontal position of the next word.
    pub fn draw(&self, bank: &WordBank, tier: Tier, rng: &mut dyn WordRng) -> FallingWord {
        let words = bank.words_for_tier(tier);
        let text = words[rng.next_below(words.len() as u32) as usize];
        let left = rng.next_below(self.horizontal_range);
        FallingWord::new(text, left)
    }

    pub fn spawn<R: Renderer + ?Sized>(
        &self,
        bank: &WordBank,
        tier: Tier,
        rng: &mut dyn WordRng,
        field: &mut FallingWordField,
        renderer: &mut R,
    ) -> WordId {
        let word = self.draw(bank, tier, rng);
        log::debug!(
            "spawn '{}' at {}% (tier {})",
            word.full_text(),
            word.horizontal_position(),
            tier
        );
        field.insert(word, renderer)
    }
}
