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

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::word::Word;
use crate::types::word_id::WordId;

/// Number of options in a multiple choice question, the answer included.
pub const CHOICE_COUNT: usize = 4;

#[derive(Clone, PartialEq, Debug)]
pub struct Choice {
    pub id: WordId,
    pub word: String,
    pub meaning: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Choices {
    pub options: Vec<Choice>,
    /// Index of the correct option.
    pub answer: usize,
}

impl Choices {
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.answer
    }
}

/// Build a multiple choice question for `target`: three distractors drawn
/// uniformly without replacement from `pool`, plus the target, in random
/// order. Returns `None` if the pool does not hold enough other words.
pub fn build_choices<R: Rng + ?Sized>(
    target: &Word,
    pool: &[Word],
    rng: &mut R,
) -> Option<Choices> {
    let others: Vec<&Word> = pool.iter().filter(|w| w.id != target.id).collect();
    if others.len() < CHOICE_COUNT - 1 {
        log::error!(
            "Cannot build a multiple choice question from {} other words.",
            others.len()
        );
        return None;
    }
    let mut options: Vec<Choice> = others
        .choose_multiple(rng, CHOICE_COUNT - 1)
        .map(|w| to_choice(w))
        .collect();
    options.push(to_choice(target));
    options.shuffle(rng);
    let answer = options.iter().position(|c| c.id == target.id)?;
    Some(Choices { options, answer })
}

fn to_choice(word: &Word) -> Choice {
    Choice {
        id: word.id,
        word: word.word.clone(),
        meaning: word.meaning.clone(),
    }
}
