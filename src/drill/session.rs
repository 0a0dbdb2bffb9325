// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::VecDeque;

use rand::Rng;
use serde::Serialize;

use crate::drill::choice::CHOICE_COUNT;
use crate::drill::choice::Choices;
use crate::drill::choice::build_choices;
use crate::drill::mode::Mode;
use crate::drill::mode::Phase;
use crate::drill::mode::phase_for;
use crate::drill::mode::stages_for;
use crate::srs::advance;
use crate::types::date::Date;
use crate::types::stats::StatsDelta;
use crate::types::timestamp::Timestamp;
use crate::types::word::Word;
use crate::types::word::WordStatus;

/// How long after a completion it can still be undone.
pub const DEFAULT_UNDO_WINDOW_MS: i64 = 5_000;

/// A word as it moves through one session.
#[derive(Clone, Debug)]
pub struct SessionWord {
    pub word: Word,
    /// Index into the word's stage plan for this session.
    pub session_stage: usize,
    /// Whether the word was `New` when it entered the session.
    pub entered_new: bool,
}

impl SessionWord {
    pub fn enter(word: Word) -> Self {
        let entered_new = word.status == WordStatus::New;
        Self {
            word,
            session_stage: 0,
            entered_new,
        }
    }
}

/// The result of submitting an answer.
#[derive(Clone, PartialEq, Debug)]
pub enum Answer {
    /// The word moves on to its next phase. Nothing to persist.
    NextStage,
    /// The answer was wrong. The word's scheduling was reset and it went to
    /// the back of the queue. The caller should persist `word`.
    Mistake { word: Word },
    /// The word finished its last phase and was advanced on the ladder. The
    /// caller should persist `word`.
    Completed { word: Word },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub completed: u32,
    pub learned: u32,
    pub reviewed: u32,
    pub elapsed_seconds: u64,
}

/// The most recent completion, kept so it can be undone.
struct Completion {
    /// The word as it was before it was advanced.
    before: Word,
    entered_new: bool,
    completed_at: Timestamp,
}

/// One learning or review run over a fixed set of words.
pub struct Session {
    mode: Mode,
    /// The day the session started. New words learned in this session get
    /// this as their learned date.
    today: Date,
    /// Every word the learner has, for multiple choice distractors.
    pool: Vec<Word>,
    multiple_choice: bool,
    total: usize,
    queue: VecDeque<SessionWord>,
    current: Option<SessionWord>,
    /// Set after a wrong answer until the learner acknowledges it.
    feedback: bool,
    completed: u32,
    learned: u32,
    reviewed: u32,
    elapsed_ms: u64,
    last_completion: Option<Completion>,
    undo_window_ms: i64,
}

impl Session {
    pub fn new(mode: Mode, words: Vec<Word>, pool: Vec<Word>, today: Date) -> Self {
        let multiple_choice = pool.len() >= CHOICE_COUNT;
        if mode == Mode::Learn && !multiple_choice {
            log::warn!(
                "Only {} words in the collection, skipping the multiple choice phase.",
                pool.len()
            );
        }
        let total = words.len();
        let mut queue: VecDeque<SessionWord> = words.into_iter().map(SessionWord::enter).collect();
        let current = queue.pop_front();
        log::debug!("Starting {mode} session with {total} words.");
        Self {
            mode,
            today,
            pool,
            multiple_choice,
            total,
            queue,
            current,
            feedback: false,
            completed: 0,
            learned: 0,
            reviewed: 0,
            elapsed_ms: 0,
            last_completion: None,
            undo_window_ms: DEFAULT_UNDO_WINDOW_MS,
        }
    }

    pub fn with_undo_window(mut self, millis: i64) -> Self {
        self.undo_window_ms = millis;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// The word being shown, or `None` once the session is complete.
    pub fn current(&self) -> Option<&SessionWord> {
        self.current.as_ref()
    }

    /// The words waiting after the current one, front first.
    pub fn queue(&self) -> impl Iterator<Item = &SessionWord> {
        self.queue.iter()
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_none()
    }

    /// Words not yet completed in this session.
    pub fn remaining(&self) -> usize {
        match (&self.current, self.feedback) {
            // The failed word is both shown and queued.
            (Some(_), true) => self.queue.len(),
            (Some(_), false) => self.queue.len() + 1,
            (None, _) => 0,
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        let current = self.current.as_ref()?;
        if self.feedback {
            Some(Phase::Feedback)
        } else {
            Some(phase_for(current, self.mode, self.multiple_choice))
        }
    }

    /// The multiple choice question for the current word. Only available in
    /// the `Select` phase.
    pub fn choices<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Choices> {
        if self.phase() != Some(Phase::Select) {
            log::error!("Multiple choice requested outside the select phase.");
            debug_assert!(false, "multiple choice requested outside the select phase");
            return None;
        }
        let current = self.current.as_ref()?;
        build_choices(&current.word, &self.pool, rng)
    }

    /// Record an answer for the current word.
    ///
    /// A wrong answer always costs the word its progress on the ladder, even
    /// partway through its stage plan. It does not touch the undo slot. A
    /// right answer either moves the word to its next phase or, on the last
    /// phase, advances it on the ladder.
    ///
    /// Answering with no word up, or before a mistake is acknowledged, is a
    /// caller bug: it panics in debug builds and otherwise returns `None`,
    /// changing nothing.
    pub fn submit(&mut self, correct: bool, now: Timestamp) -> Option<Answer> {
        if self.feedback {
            log::error!("Answering before acknowledging a mistake.");
            debug_assert!(false, "answering before acknowledging a mistake");
            return None;
        }
        let Some(mut current) = self.current.take() else {
            log::error!("Answering in a completed session.");
            debug_assert!(false, "answering in a completed session");
            return None;
        };
        if !correct {
            let update = advance(&current.word, false, now, self.today);
            current.word.apply(&update);
            log::debug!("{} wrong, requeued", current.word.id.short());
            let mut requeued = current.clone();
            requeued.session_stage = 0;
            self.queue.push_back(requeued);
            let word = current.word.clone();
            self.current = Some(current);
            self.feedback = true;
            return Some(Answer::Mistake { word });
        }
        let stages = stages_for(&current.word, self.mode, self.multiple_choice);
        if current.session_stage + 1 < stages.len() {
            current.session_stage += 1;
            self.current = Some(current);
            return Some(Answer::NextStage);
        }
        let before = current.word.clone();
        let update = advance(&current.word, true, now, self.today);
        current.word.apply(&update);
        log::debug!(
            "{} {} stage={} interval={}m due={}",
            current.word.id.short(),
            current.word.status,
            current.word.stage,
            current.word.interval_minutes,
            current.word.next_review_at
        );
        self.completed += 1;
        if current.entered_new {
            self.learned += 1;
        } else {
            self.reviewed += 1;
        }
        self.last_completion = Some(Completion {
            before,
            entered_new: current.entered_new,
            completed_at: now,
        });
        self.current = self.queue.pop_front();
        if self.current.is_none() {
            log::debug!("Session completed");
        }
        Some(Answer::Completed { word: current.word })
    }

    /// Dismiss the feedback shown after a mistake and move to the next word.
    pub fn acknowledge(&mut self) {
        if !self.feedback {
            log::error!("Acknowledging without a mistake.");
            debug_assert!(false, "acknowledging without a mistake");
            return;
        }
        self.feedback = false;
        self.current = self.queue.pop_front();
    }

    /// When the last completion stops being undoable.
    pub fn undo_deadline(&self) -> Option<Timestamp> {
        self.last_completion
            .as_ref()
            .map(|c| c.completed_at.plus_millis(self.undo_window_ms))
    }

    pub fn can_undo(&self, now: Timestamp) -> bool {
        match self.undo_deadline() {
            Some(deadline) => !self.is_complete() && now <= deadline,
            None => false,
        }
    }

    /// Forget the last completion if its undo window has passed.
    pub fn expire_undo(&mut self, now: Timestamp) {
        if let Some(deadline) = self.undo_deadline() {
            if now > deadline {
                self.last_completion = None;
            }
        }
    }

    /// Revert the last completion. The word gets back its state from before
    /// the answer and is shown again from its first phase, ahead of the word
    /// that was up. Returns the restored word, which the caller should
    /// persist, or `None` if there is nothing to undo.
    pub fn undo(&mut self, now: Timestamp) -> Option<Word> {
        if !self.can_undo(now) {
            return None;
        }
        let completion = self.last_completion.take()?;
        self.completed -= 1;
        if completion.entered_new {
            self.learned -= 1;
        } else {
            self.reviewed -= 1;
        }
        if self.feedback {
            // The failed word is already queued at the back.
            self.feedback = false;
            self.current = None;
        }
        if let Some(current) = self.current.take() {
            self.queue.push_front(current);
        }
        let word = completion.before;
        log::debug!("{} undone", word.id.short());
        self.current = Some(SessionWord {
            word: word.clone(),
            session_stage: 0,
            entered_new: completion.entered_new,
        });
        Some(word)
    }

    /// Add study time. Called periodically by the caller's timer.
    pub fn tick(&mut self, duration_ms: u64) {
        if self.is_complete() {
            return;
        }
        self.elapsed_ms += duration_ms;
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            completed: self.completed,
            learned: self.learned,
            reviewed: self.reviewed,
            elapsed_seconds: self.elapsed_seconds(),
        }
    }

    /// The session's contribution to the day's totals.
    pub fn stats_delta(&self) -> StatsDelta {
        StatsDelta {
            time_seconds: i64::try_from(self.elapsed_seconds()).unwrap_or(i64::MAX),
            learned: i64::from(self.learned),
            reviewed: i64::from(self.reviewed),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::error::Fallible;
    use crate::srs::LADDER;

    fn now() -> Fallible<Timestamp> {
        Timestamp::from_millis(1_700_000_000_000)
    }

    fn today() -> Fallible<Date> {
        Date::parse("2023-11-14")
    }

    fn new_words(n: usize) -> Fallible<Vec<Word>> {
        let now = now()?;
        Ok((0..n)
            .map(|i| Word::new(format!("word{i}"), format!("meaning{i}"), now))
            .collect())
    }

    fn due_words(n: usize, stage: u32) -> Fallible<Vec<Word>> {
        let now = now()?;
        let mut words = new_words(n)?;
        for word in &mut words {
            word.status = crate::srs::status_for_stage(stage.max(1));
            word.stage = stage;
            word.next_review_at = now.plus_millis(-1);
            word.learned_date = Some(Date::parse("2023-11-01")?);
        }
        Ok(words)
    }

    fn learn_session(words: Vec<Word>, pool_size: usize) -> Fallible<Session> {
        let pool = new_words(pool_size)?;
        Ok(Session::new(Mode::Learn, words, pool, today()?))
    }

    #[test]
    fn test_learn_new_word_takes_three_stages() -> Fallible<()> {
        let now = now()?;
        let words = new_words(1)?;
        let id = words[0].id;
        let mut session = learn_session(words, 10)?;
        assert_eq!(session.phase(), Some(Phase::Recall));
        assert_eq!(session.submit(true, now), Some(Answer::NextStage));
        assert_eq!(session.phase(), Some(Phase::Select));
        assert_eq!(session.submit(true, now), Some(Answer::NextStage));
        assert_eq!(session.phase(), Some(Phase::Spell));
        let Some(Answer::Completed { word }) = session.submit(true, now) else {
            panic!("expected completion");
        };
        assert_eq!(word.id, id);
        assert_eq!(word.status, WordStatus::Learning);
        assert_eq!(word.stage, 1);
        assert_eq!(word.interval_minutes, 10);
        assert_eq!(word.learned_date, Some(today()?));
        assert!(session.is_complete());
        assert_eq!(session.phase(), None);
        let stats = session.stats();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.learned, 1);
        assert_eq!(stats.reviewed, 0);
        Ok(())
    }

    #[test]
    fn test_mistake_on_second_stage() -> Fallible<()> {
        let now = now()?;
        let words = new_words(3)?;
        let first = words[0].id;
        let mut session = learn_session(words, 10)?;
        session.submit(true, now);
        assert_eq!(session.phase(), Some(Phase::Select));
        let Some(Answer::Mistake { word }) = session.submit(false, now) else {
            panic!("expected mistake");
        };
        assert_eq!(word.id, first);
        assert_eq!(word.status, WordStatus::Learning);
        assert_eq!(word.stage, 0);
        assert_eq!(word.interval_minutes, 0);
        assert_eq!(word.next_review_at, now);
        assert_eq!(session.phase(), Some(Phase::Feedback));
        assert_eq!(session.current().map(|c| c.word.id), Some(first));
        let back = session.queue().last().expect("requeued");
        assert_eq!(back.word.id, first);
        assert_eq!(back.session_stage, 0);
        assert_eq!(session.remaining(), 3);
        session.acknowledge();
        assert_eq!(session.phase(), Some(Phase::Recall));
        assert_ne!(session.current().map(|c| c.word.id), Some(first));
        Ok(())
    }

    #[test]
    fn test_requeued_word_restarts_from_recall() -> Fallible<()> {
        let now = now()?;
        let mut session = learn_session(new_words(1)?, 10)?;
        session.submit(true, now);
        session.submit(true, now);
        session.submit(false, now);
        session.acknowledge();
        let current = session.current().expect("same word again");
        assert_eq!(current.session_stage, 0);
        assert!(current.entered_new);
        assert_eq!(session.phase(), Some(Phase::Recall));
        for _ in 0..2 {
            assert_eq!(session.submit(true, now), Some(Answer::NextStage));
        }
        let Some(Answer::Completed { word }) = session.submit(true, now) else {
            panic!("expected completion");
        };
        assert_eq!(word.stage, 1);
        assert_eq!(session.stats().learned, 1);
        Ok(())
    }

    #[test]
    fn test_review_queue_exhaustion() -> Fallible<()> {
        let now = now()?;
        let n = 5;
        let mut session = Session::new(Mode::Review, due_words(n, 2)?, new_words(10)?, today()?);
        for _ in 0..n {
            assert_eq!(session.phase(), Some(Phase::Recall));
            assert!(matches!(
                session.submit(true, now),
                Some(Answer::Completed { .. })
            ));
        }
        assert!(session.is_complete());
        assert_eq!(session.queue().count(), 0);
        assert_eq!(session.stats().completed, n as u32);
        assert_eq!(session.stats().reviewed, n as u32);
        Ok(())
    }

    #[test]
    fn test_review_stage_five() -> Fallible<()> {
        let now = now()?;
        let mut session = Session::new(Mode::Review, due_words(1, 5)?, vec![], today()?);
        let Some(Answer::Completed { word }) = session.submit(true, now) else {
            panic!("expected completion");
        };
        assert_eq!(word.stage, 6);
        assert_eq!(word.status, WordStatus::Review);
        assert_eq!(word.interval_minutes, LADDER[6]);
        Ok(())
    }

    #[test]
    fn test_undo_reverts_completion() -> Fallible<()> {
        let now = now()?;
        let words = due_words(3, 2)?;
        let snapshot = words[0].clone();
        let second = words[1].id;
        let mut session = Session::new(Mode::Review, words, vec![], today()?);
        session.submit(true, now);
        assert_eq!(session.stats().completed, 1);
        assert_eq!(session.current().map(|c| c.word.id), Some(second));
        let restored = session.undo(now).expect("undo allowed");
        assert_eq!(restored, snapshot);
        assert_eq!(session.stats().completed, 0);
        assert_eq!(session.stats().reviewed, 0);
        let current = session.current().expect("restored word shown");
        assert_eq!(current.word, snapshot);
        assert_eq!(current.session_stage, 0);
        let next: Vec<_> = session.queue().map(|w| w.word.id).collect();
        assert_eq!(next[0], second);
        assert_eq!(next.len(), 2);
        Ok(())
    }

    #[test]
    fn test_undo_keeps_displaced_stage() -> Fallible<()> {
        let now = now()?;
        let mut session = learn_session(new_words(2)?, 10)?;
        for _ in 0..3 {
            session.submit(true, now);
        }
        session.submit(true, now);
        assert_eq!(session.phase(), Some(Phase::Select));
        let restored = session.undo(now).expect("undo allowed");
        assert_eq!(restored.status, WordStatus::New);
        assert_eq!(restored.learned_date, None);
        assert_eq!(session.stats().learned, 0);
        let displaced = session.queue().next().expect("displaced word");
        assert_eq!(displaced.session_stage, 1);
        Ok(())
    }

    #[test]
    fn test_undo_is_single_use() -> Fallible<()> {
        let now = now()?;
        let mut session = Session::new(Mode::Review, due_words(3, 1)?, vec![], today()?);
        session.submit(true, now);
        assert!(session.undo(now).is_some());
        assert!(session.undo(now).is_none());
        assert_eq!(session.stats().completed, 0);
        assert_eq!(session.remaining(), 3);
        Ok(())
    }

    #[test]
    fn test_undo_window() -> Fallible<()> {
        let now = now()?;
        let mut session =
            Session::new(Mode::Review, due_words(3, 1)?, vec![], today()?).with_undo_window(3_000);
        assert_eq!(session.undo_deadline(), None);
        session.submit(true, now);
        assert_eq!(session.undo_deadline(), Some(now.plus_millis(3_000)));
        assert!(session.can_undo(now.plus_millis(3_000)));
        assert!(!session.can_undo(now.plus_millis(3_001)));
        assert!(session.undo(now.plus_millis(3_001)).is_none());
        session.expire_undo(now.plus_millis(3_001));
        assert_eq!(session.undo_deadline(), None);
        assert!(session.undo(now).is_none());
        Ok(())
    }

    #[test]
    fn test_undo_without_completion() -> Fallible<()> {
        let now = now()?;
        let mut session = Session::new(Mode::Review, due_words(2, 1)?, vec![], today()?);
        assert!(session.undo(now).is_none());
        session.submit(false, now);
        assert!(session.undo(now).is_none());
        Ok(())
    }

    #[test]
    fn test_undo_after_mistake_within_window() -> Fallible<()> {
        let now = now()?;
        let words = due_words(3, 1)?;
        let ids: Vec<_> = words.iter().map(|w| w.id).collect();
        let snapshot = words[0].clone();
        let mut session = Session::new(Mode::Review, words, vec![], today()?);
        session.submit(true, now);
        assert!(session.undo_deadline().is_some());
        session.submit(false, now.plus_millis(1_000));
        session.acknowledge();
        assert!(session.can_undo(now.plus_millis(2_000)));
        let restored = session.undo(now.plus_millis(2_000)).expect("undo allowed");
        assert_eq!(restored, snapshot);
        assert_eq!(session.current().map(|c| c.word.id), Some(ids[0]));
        let queued: Vec<_> = session.queue().map(|w| w.word.id).collect();
        assert_eq!(queued, vec![ids[2], ids[1]]);
        assert_eq!(session.remaining(), 3);
        assert_eq!(session.stats().completed, 0);
        Ok(())
    }

    #[test]
    fn test_undo_during_feedback() -> Fallible<()> {
        let now = now()?;
        let words = due_words(3, 1)?;
        let ids: Vec<_> = words.iter().map(|w| w.id).collect();
        let mut session = Session::new(Mode::Review, words, vec![], today()?);
        session.submit(true, now);
        session.submit(false, now);
        assert_eq!(session.phase(), Some(Phase::Feedback));
        assert!(session.undo(now).is_some());
        assert_eq!(session.phase(), Some(Phase::Recall));
        assert_eq!(session.current().map(|c| c.word.id), Some(ids[0]));
        let queued: Vec<_> = session.queue().map(|w| w.word.id).collect();
        assert_eq!(queued, vec![ids[2], ids[1]]);
        assert_eq!(session.remaining(), 3);
        for _ in 0..3 {
            assert!(matches!(
                session.submit(true, now),
                Some(Answer::Completed { .. })
            ));
        }
        assert!(session.is_complete());
        assert_eq!(session.stats().completed, 3);
        Ok(())
    }

    #[test]
    fn test_no_undo_after_session_completes() -> Fallible<()> {
        let now = now()?;
        let mut session = Session::new(Mode::Review, due_words(1, 1)?, vec![], today()?);
        session.submit(true, now);
        assert!(session.is_complete());
        assert!(!session.can_undo(now));
        assert!(session.undo(now).is_none());
        Ok(())
    }

    #[test]
    fn test_single_stage_modes_complete_immediately() -> Fallible<()> {
        let now = now()?;
        for (mode, phase) in [(Mode::Immersive, Phase::Immersive), (Mode::Spell, Phase::Spell)] {
            let mut session = Session::new(mode, new_words(1)?, new_words(10)?, today()?);
            assert_eq!(session.phase(), Some(phase));
            let Some(Answer::Completed { word }) = session.submit(true, now) else {
                panic!("expected completion");
            };
            assert_eq!(word.stage, 1);
            assert_eq!(session.stats().learned, 1);
        }
        Ok(())
    }

    #[test]
    fn test_small_pool_skips_select() -> Fallible<()> {
        let now = now()?;
        let words = new_words(2)?;
        let mut session = Session::new(Mode::Learn, words.clone(), words, today()?);
        assert_eq!(session.submit(true, now), Some(Answer::NextStage));
        assert_eq!(session.phase(), Some(Phase::Spell));
        assert!(matches!(
            session.submit(true, now),
            Some(Answer::Completed { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_choices_in_select_phase() -> Fallible<()> {
        let now = now()?;
        let pool = new_words(6)?;
        let target = pool[0].clone();
        let mut session = Session::new(Mode::Learn, vec![target.clone()], pool, today()?);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(session.phase(), Some(Phase::Recall));
        session.submit(true, now);
        let choices = session.choices(&mut rng).expect("select phase");
        assert_eq!(choices.options.len(), 4);
        assert_eq!(choices.options[choices.answer].id, target.id);
        Ok(())
    }

    #[test]
    fn test_tick_and_stats_delta() -> Fallible<()> {
        let now = now()?;
        let mut session = Session::new(Mode::Review, due_words(1, 1)?, vec![], today()?);
        session.tick(1_500);
        session.tick(1_000);
        assert_eq!(session.elapsed_seconds(), 2);
        session.submit(true, now);
        session.tick(10_000);
        assert_eq!(session.elapsed_seconds(), 2);
        let delta = session.stats_delta();
        assert_eq!(delta.time_seconds, 2);
        assert_eq!(delta.reviewed, 1);
        assert_eq!(delta.learned, 0);
        Ok(())
    }

    #[test]
    fn test_empty_session_is_complete() -> Fallible<()> {
        let session = Session::new(Mode::Learn, vec![], vec![], today()?);
        assert!(session.is_complete());
        assert_eq!(session.remaining(), 0);
        assert_eq!(session.phase(), None);
        Ok(())
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "answering in a completed session")]
    fn test_submit_to_completed_session_panics() {
        let today = Date::parse("2023-11-14").unwrap();
        let mut session = Session::new(Mode::Learn, vec![], vec![], today);
        session.submit(true, Timestamp::from_millis(0).unwrap());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "answering before acknowledging a mistake")]
    fn test_submit_during_feedback_panics() {
        let now = now().unwrap();
        let words = due_words(2, 1).unwrap();
        let mut session = Session::new(Mode::Review, words, vec![], today().unwrap());
        session.submit(false, now);
        session.submit(true, now);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "acknowledging without a mistake")]
    fn test_acknowledge_without_mistake_panics() {
        let words = due_words(1, 1).unwrap();
        let mut session = Session::new(Mode::Review, words, vec![], today().unwrap());
        session.acknowledge();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "multiple choice requested outside the select phase")]
    fn test_choices_outside_select_panics() {
        let pool = new_words(6).unwrap();
        let session = Session::new(Mode::Learn, pool.clone(), pool, today().unwrap());
        let _ = session.choices(&mut StdRng::seed_from_u64(0));
    }
}
