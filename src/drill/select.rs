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

use crate::drill::mode::Mode;
use crate::types::date::Date;
use crate::types::timestamp::Timestamp;
use crate::types::word::Word;
use crate::types::word::WordStatus;

pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Filters applied when picking the words for a session.
#[derive(Clone, Debug)]
pub struct Selection {
    /// Maximum words per session. Ignored by `ReviewAll`.
    pub batch_size: usize,
    /// Only review words first learned on this day.
    pub cohort: Option<Date>,
    pub category: Option<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            cohort: None,
            category: None,
        }
    }
}

/// Pick the words for a session in `mode`, preserving store order.
pub fn select_words(
    words: &[Word],
    mode: Mode,
    now: Timestamp,
    selection: &Selection,
) -> Vec<Word> {
    let in_category = |word: &Word| match &selection.category {
        Some(category) => word.category.as_deref() == Some(category.as_str()),
        None => true,
    };
    let in_cohort = |word: &Word| match selection.cohort {
        Some(cohort) => word.learned_date == Some(cohort),
        None => true,
    };
    let candidates = words.iter().filter(|w| in_category(*w));
    let selected: Vec<Word> = match mode {
        Mode::Learn | Mode::Immersive | Mode::Spell => candidates
            .filter(|w| w.status == WordStatus::New)
            .take(selection.batch_size)
            .cloned()
            .collect(),
        Mode::Review => candidates
            .filter(|w| w.is_due(now) && in_cohort(*w))
            .take(selection.batch_size)
            .cloned()
            .collect(),
        Mode::ReviewAll => candidates
            .filter(|w| w.is_due(now) && in_cohort(*w))
            .cloned()
            .collect(),
    };
    log::debug!("Selected {} words for a {mode} session.", selected.len());
    selected
}
