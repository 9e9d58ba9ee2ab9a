//! Falling words and the field that holds them.

use std::collections::BTreeMap;
use std::fmt;

use crate::render::Renderer;

/// Stable handle for a word in the field. Ids grow monotonically, so
/// iterating the field by id is iterating in spawn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(u64);

impl WordId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Progress of a word through typing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordState {
    Untyped,
    PartiallyTyped,
    Completed,
}

/// One word on its way down.
///
/// Typed progress is kept as a byte offset into `full_text`, so
/// `typed_prefix() + remaining_text() == full_text()` holds by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallingWord {
    full_text: String,
    typed_len: usize,
    vertical_position: u32,
    horizontal_position: u32,
}

impl FallingWord {
    pub fn new(text: impl Into<String>, horizontal_position: u32) -> Self {
        Self::at(text, horizontal_position, 0)
    }

    /// Word placed at an arbitrary height, mostly for tests.
    pub fn at(text: impl Into<String>, horizontal_position: u32, vertical_position: u32) -> Self {
        Self {
            full_text: text.into(),
            typed_len: 0,
            vertical_position,
            horizontal_position,
        }
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn typed_prefix(&self) -> &str {
        &self.full_text[..self.typed_len]
    }

    pub fn remaining_text(&self) -> &str {
        &self.full_text[self.typed_len..]
    }

    pub fn next_char(&self) -> Option<char> {
        self.remaining_text().chars().next()
    }

    /// Pixels from the top of the field.
    pub fn vertical_position(&self) -> u32 {
        self.vertical_position
    }

    /// Percent from the left edge of the field.
    pub fn horizontal_position(&self) -> u32 {
        self.horizontal_position
    }

    pub fn state(&self) -> WordState {
        if self.typed_len == 0 {
            WordState::Untyped
        } else if self.typed_len < self.full_text.len() {
            WordState::PartiallyTyped
        } else {
            WordState::Completed
        }
    }

    /// Moves `c` from the remaining text into the typed prefix if it is the
    /// next expected character.
    pub fn type_char(&mut self, c: char) -> bool {
        if self.next_char() != Some(c) {
            return false;
        }
        self.typed_len += c.len_utf8();
        true
    }

    /// Snaps back to untyped. Returns whether anything was typed before.
    pub fn reset(&mut self) -> bool {
        let had_progress = self.typed_len != 0;
        self.typed_len = 0;
        had_progress
    }

    /// Number of characters in the whole word, which is also its score.
    pub fn points(&self) -> u32 {
        self.full_text.chars().count() as u32
    }

    fn fall(&mut self, step: u32) -> u32 {
        self.vertical_position = self.vertical_position.saturating_add(step);
        self.vertical_position
    }
}

/// The active set of falling words.
#[derive(Debug)]
pub struct FallingWordField {
    words: BTreeMap<WordId, FallingWord>,
    next_id: u64,
    step: u32,
    lower_bound: u32,
}

impl Default for FallingWordField {
    fn default() -> Self {
        Self::new(5, 760)
    }
}

impl FallingWordField {
    pub fn new(step: u32, lower_bound: u32) -> Self {
        Self {
            words: BTreeMap::new(),
            next_id: 0,
            step,
            lower_bound,
        }
    }

    /// Adds a word to the active set and draws it.
    pub fn insert<R: Renderer + ?Sized>(&mut self, word: FallingWord, renderer: &mut R) -> WordId {
        let id = WordId(self.next_id);
        self.next_id += 1;
        renderer.spawn(id, &word);
        self.words.insert(id, word);
        id
    }

    pub fn remove(&mut self, id: WordId) -> Option<FallingWord> {
        self.words.remove(&id)
    }

    pub fn get(&self, id: WordId) -> Option<&FallingWord> {
        self.words.get(&id)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &FallingWord)> {
        self.words.iter().map(|(id, w)| (*id, w))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (WordId, &mut FallingWord)> {
        self.words.iter_mut().map(|(id, w)| (*id, w))
    }

    /// One animation tick: every word falls by `step`, and words at or past
    /// the lower bound are dropped. Returns the ids of the dropped words.
    pub fn advance<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Vec<WordId> {
        let (step, bound) = (self.step, self.lower_bound);
        let mut lost = Vec::new();
        self.words.retain(|&id, word| {
            if word.fall(step) >= bound {
                renderer.remove(id, word);
                lost.push(id);
                false
            } else {
                renderer.advance(id, word);
                true
            }
        });
        lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullRenderer;
    use crate::render::recording::{Call, Recorder};

    #[test]
    fn typed_and_remaining_always_rebuild_full_text() {
        let mut word = FallingWord::new("mery", 10);
        for c in ['m', 'e', 'x', 'm'] {
            word.type_char(c);
            assert_eq!(
                format!("{}{}", word.typed_prefix(), word.remaining_text()),
                "mery"
            );
        }
        assert_eq!(word.typed_prefix(), "me");
    }

    #[test]
    fn state_follows_progress() {
        let mut word = FallingWord::new("ju", 0);
        assert_eq!(word.state(), WordState::Untyped);
        assert!(word.type_char('j'));
        assert_eq!(word.state(), WordState::PartiallyTyped);
        assert!(!word.type_char('x'));
        assert!(word.type_char('u'));
        assert_eq!(word.state(), WordState::Completed);
    }

    #[test]
    fn reset_twice_equals_reset_once() {
        let mut word = FallingWord::new("foca", 40);
        word.type_char('f');
        word.type_char('o');
        assert!(word.reset());
        let once = word.clone();
        assert!(!word.reset());
        assert_eq!(word, once);
        assert_eq!(word.remaining_text(), "foca");
    }

    #[test]
    fn boundary_is_inclusive() {
        let mut field = FallingWordField::default();
        let at_755 = field.insert(FallingWord::at("ju", 0, 755), &mut NullRenderer);
        let at_756 = field.insert(FallingWord::at("fr", 0, 756), &mut NullRenderer);
        let at_700 = field.insert(FallingWord::at("fv", 0, 700), &mut NullRenderer);

        let lost = field.advance(&mut NullRenderer);
        assert_eq!(lost, vec![at_755, at_756]);
        assert_eq!(field.get(at_700).map(FallingWord::vertical_position), Some(705));
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn word_survives_151_ticks() {
        let mut field = FallingWordField::default();
        let id = field.insert(FallingWord::new("jm", 12), &mut NullRenderer);
        for _ in 0..151 {
            assert!(field.advance(&mut NullRenderer).is_empty());
        }
        assert_eq!(field.get(id).map(FallingWord::vertical_position), Some(755));
        assert_eq!(field.advance(&mut NullRenderer), vec![id]);
        assert!(field.is_empty());
    }

    #[test]
    fn renderer_sees_spawn_advance_remove() {
        let mut field = FallingWordField::new(5, 10);
        let mut rec = Recorder::default();
        let id = field.insert(FallingWord::new("fu", 3), &mut rec);
        field.advance(&mut rec);
        field.advance(&mut rec);
        assert_eq!(
            rec.calls,
            vec![
                Call::Spawn(id, "fu".into()),
                Call::Advance(id, 5),
                Call::Remove(id),
            ]
        );
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut field = FallingWordField::default();
        let a = field.insert(FallingWord::new("ju", 0), &mut NullRenderer);
        let b = field.insert(FallingWord::new("fr", 0), &mut NullRenderer);
        field.remove(a);
        let c = field.insert(FallingWord::new("fv", 0), &mut NullRenderer);
        let order: Vec<WordId> = field.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![b, c]);
    }
}
