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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Serialize;

use crate::drill::session::SessionWord;
use crate::types::word::Word;
use crate::types::word::WordStatus;

/// The kind of session being run.
#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Learn new words: recall, then multiple choice, then spelling.
    Learn,
    /// Review a batch of due words.
    Review,
    /// Review every due word.
    ReviewAll,
    /// Read through new words with their examples.
    Immersive,
    /// Spell new words from their meaning.
    Spell,
}

impl Mode {
    /// Whether the session draws from new words rather than due ones.
    pub fn studies_new_words(self) -> bool {
        match self {
            Mode::Learn | Mode::Immersive | Mode::Spell => true,
            Mode::Review | Mode::ReviewAll => false,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Learn => write!(f, "learn"),
            Mode::Review => write!(f, "review"),
            Mode::ReviewAll => write!(f, "review-all"),
            Mode::Immersive => write!(f, "immersive"),
            Mode::Spell => write!(f, "spell"),
        }
    }
}

/// What the learner is shown for the current word.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Show the word, reveal the meaning, self-grade.
    Recall,
    /// Pick the meaning out of several options.
    Select,
    /// Type the word given its meaning.
    Spell,
    /// A mistake was made: show the right answer until acknowledged.
    Feedback,
    /// Show everything at once.
    Immersive,
}

const LEARN: &[Phase] = &[Phase::Recall, Phase::Select, Phase::Spell];
const LEARN_WITHOUT_CHOICE: &[Phase] = &[Phase::Recall, Phase::Spell];
const RECALL: &[Phase] = &[Phase::Recall];
const SPELL: &[Phase] = &[Phase::Spell];
const IMMERSIVE: &[Phase] = &[Phase::Immersive];

/// The phases a word must pass, in order, before it counts as complete for
/// the session. `multiple_choice` is false when the word pool is too small
/// to build a multiple choice question.
pub fn stages_for(word: &Word, mode: Mode, multiple_choice: bool) -> &'static [Phase] {
    match mode {
        Mode::Immersive => IMMERSIVE,
        Mode::Spell => SPELL,
        Mode::Learn => match word.status {
            WordStatus::New | WordStatus::Learning => {
                if multiple_choice {
                    LEARN
                } else {
                    LEARN_WITHOUT_CHOICE
                }
            }
            WordStatus::Review | WordStatus::Mastered => RECALL,
        },
        Mode::Review | Mode::ReviewAll => RECALL,
    }
}

pub fn phase_for(session_word: &SessionWord, mode: Mode, multiple_choice: bool) -> Phase {
    let stages = stages_for(&session_word.word, mode, multiple_choice);
    match stages.get(session_word.session_stage) {
        Some(phase) => *phase,
        None => stages[stages.len() - 1],
    }
}
