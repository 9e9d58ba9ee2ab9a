//! Keystroke matching against the falling words.
//!
//! Every keystroke is checked against every active word. A word whose next
//! expected character matches advances by one; every other word loses its
//! progress, even if the player was aiming elsewhere. Words typed to the end
//! leave the field and score their length.

use crate::falling::{FallingWordField, WordId};
use crate::render::Renderer;
use crate::score::ScoreModel;
use crate::word_bank::Tier;

/// A word typed to the end by a keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub id: WordId,
    pub text: String,
    pub points: u32,
}

/// What one keystroke did to the field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub advanced: Vec<WordId>,
    /// Words that had progress and lost it.
    pub reset: Vec<WordId>,
    pub completed: Vec<Completion>,
    pub tier_up: Option<Tier>,
}

impl MatchReport {
    pub fn points(&self) -> u32 {
        self.completed.iter().map(|c| c.points).sum()
    }
}

pub fn key_press<R: Renderer + ?Sized>(
    key: char,
    field: &mut FallingWordField,
    score: &mut ScoreModel,
    renderer: &mut R,
) -> MatchReport {
    let mut report = MatchReport::default();

    for (id, word) in field.iter_mut() {
        if word.type_char(key) {
            if word.remaining_text().is_empty() {
                report.completed.push(Completion {
                    id,
                    text: word.full_text().to_string(),
                    points: word.points(),
                });
            } else {
                report.advanced.push(id);
                renderer.update_progress(id, word);
            }
        } else if word.reset() {
            report.reset.push(id);
            renderer.update_progress(id, word);
        }
    }

    for done in &report.completed {
        if let Some(word) = field.remove(done.id) {
            renderer.remove(done.id, &word);
        }
        log::info!("completed '{}' (+{})", done.text, done.points);
        if let Some(tier) = score.award_points(done.points) {
            report.tier_up = Some(tier);
        }
    }
    if !report.completed.is_empty() {
        renderer.show_score(score.score(), score.current_tier());
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::falling::{FallingWord, WordState};
    use crate::render::NullRenderer;
    use crate::render::recording::{Call, Recorder};

    fn field_with(words: &[&str]) -> (FallingWordField, Vec<WordId>) {
        let mut field = FallingWordField::default();
        let ids = words
            .iter()
            .map(|w| field.insert(FallingWord::new(*w, 0), &mut NullRenderer))
            .collect();
        (field, ids)
    }

    fn progress(field: &FallingWordField, id: WordId) -> (String, String) {
        let word = field.get(id).unwrap();
        (word.typed_prefix().into(), word.remaining_text().into())
    }

    #[test]
    fn mismatch_snaps_back_then_completes() {
        let (mut field, ids) = field_with(&["ju"]);
        let mut score = ScoreModel::default();
        let ju = ids[0];

        key_press('j', &mut field, &mut score, &mut NullRenderer);
        assert_eq!(progress(&field, ju), ("j".into(), "u".into()));

        let report = key_press('x', &mut field, &mut score, &mut NullRenderer);
        assert_eq!(report.reset, vec![ju]);
        assert_eq!(progress(&field, ju), ("".into(), "ju".into()));

        key_press('j', &mut field, &mut score, &mut NullRenderer);
        let report = key_press('u', &mut field, &mut score, &mut NullRenderer);
        assert_eq!(
            report.completed,
            vec![Completion {
                id: ju,
                text: "ju".into(),
                points: 2,
            }]
        );
        assert!(field.is_empty());
        assert_eq!(score.score(), 2);
    }

    #[test]
    fn keystroke_resets_words_it_does_not_match() {
        let (mut field, ids) = field_with(&["ju", "fr"]);
        let mut score = ScoreModel::default();

        let report = key_press('j', &mut field, &mut score, &mut NullRenderer);
        assert_eq!(report.advanced, vec![ids[0]]);
        // "fr" had nothing typed, so its reset is a no-op.
        assert!(report.reset.is_empty());
        assert_eq!(field.get(ids[1]).unwrap().state(), WordState::Untyped);

        // Typing "f" now wipes "ju" and starts "fr".
        let report = key_press('f', &mut field, &mut score, &mut NullRenderer);
        assert_eq!(report.reset, vec![ids[0]]);
        assert_eq!(report.advanced, vec![ids[1]]);
    }

    #[test]
    fn one_key_can_finish_several_words() {
        let (mut field, _) = field_with(&["ju", "jm", "ju"]);
        let mut score = ScoreModel::default();
        key_press('j', &mut field, &mut score, &mut NullRenderer);
        let report = key_press('u', &mut field, &mut score, &mut NullRenderer);
        assert_eq!(report.completed.len(), 2);
        assert_eq!(report.points(), 4);
        assert_eq!(field.len(), 1);
        assert_eq!(score.score(), 4);
    }

    #[test]
    fn completion_reports_tier_change() {
        let (mut field, _) = field_with(&["juan"]);
        let mut score = ScoreModel::default();
        score.award_points(6);
        let mut report = MatchReport::default();
        for c in "juan".chars() {
            report = key_press(c, &mut field, &mut score, &mut NullRenderer);
        }
        assert_eq!(report.tier_up, Tier::new(1));
        assert_eq!(score.score(), 10);
    }

    #[test]
    fn renderer_follows_progress() {
        let (mut field, ids) = field_with(&["fu"]);
        let mut score = ScoreModel::default();
        let mut rec = Recorder::default();
        key_press('f', &mut field, &mut score, &mut rec);
        key_press('u', &mut field, &mut score, &mut rec);
        assert_eq!(
            rec.calls,
            vec![
                Call::Progress(ids[0], "f".into(), "u".into()),
                Call::Remove(ids[0]),
                Call::Score(2, 0),
            ]
        );
    }
}
