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

//! The review scheduler: a pure mapping from a word's state and the
//! correctness of an answer to the word's next state.

use crate::types::date::Date;
use crate::types::timestamp::Timestamp;
use crate::types::word::Word;
use crate::types::word::WordStatus;

/// Review intervals in minutes, indexed by stage: 1 minute, 10 minutes,
/// 1 hour, 12 hours, 1 day, 2 days, 4 days, 1 week.
pub const LADDER: [u32; 8] = [1, 10, 60, 720, 1440, 2880, 5760, 10080];

/// Words at or above this stage are in the `Review` state.
const REVIEW_STAGE: u32 = 3;

/// Words at or above this stage are `Mastered`.
const MASTERED_STAGE: u32 = 7;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// The scheduling fields of a word after an answer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WordUpdate {
    pub status: WordStatus,
    pub stage: u32,
    pub next_review_at: Timestamp,
    pub interval_minutes: u32,
    pub learned_date: Option<Date>,
}

/// The interval for a word that has just reached `stage`. Stages past the
/// end of the ladder use the last interval.
pub fn interval_for_stage(stage: u32) -> u32 {
    let last = LADDER.len() - 1;
    let idx = usize::try_from(stage).map_or(last, |s| s.min(last));
    LADDER[idx]
}

pub fn status_for_stage(stage: u32) -> WordStatus {
    if stage >= MASTERED_STAGE {
        WordStatus::Mastered
    } else if stage >= REVIEW_STAGE {
        WordStatus::Review
    } else {
        WordStatus::Learning
    }
}

/// Compute a word's next state. A wrong answer makes the word due
/// immediately and drops it back to stage zero; a correct answer climbs one
/// rung of the ladder. `learned_date` is only ever set once, to `today`.
pub fn advance(word: &Word, correct: bool, now: Timestamp, today: Date) -> WordUpdate {
    if !correct {
        return WordUpdate {
            status: WordStatus::Learning,
            stage: 0,
            next_review_at: now,
            interval_minutes: 0,
            learned_date: word.learned_date,
        };
    }
    let stage = word.stage.saturating_add(1);
    let interval_minutes = interval_for_stage(stage);
    WordUpdate {
        status: status_for_stage(stage),
        stage,
        next_review_at: now.plus_millis(i64::from(interval_minutes) * MILLIS_PER_MINUTE),
        interval_minutes,
        learned_date: word.learned_date.or(Some(today)),
    }
}

/// The words eligible for review at `now`, in their original order.
pub fn due_words(words: &[Word], now: Timestamp) -> Vec<&Word> {
    words.iter().filter(|word| word.is_due(now)).collect()
}
