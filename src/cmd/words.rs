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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::srs::due_words;
use crate::types::timestamp::Timestamp;
use crate::types::word::Word;
use crate::types::word_id::WordId;

/// The text fields of a word, as given on the command line.
#[derive(Default)]
pub struct WordFields {
    pub word: Option<String>,
    pub meaning: Option<String>,
    pub example: Option<String>,
    pub translation: Option<String>,
    pub category: Option<String>,
}

pub fn add_word(
    directory: Option<String>,
    word: String,
    meaning: String,
    fields: WordFields,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let word = create_word(&coll, word, meaning, fields, Timestamp::now())?;
    println!("{}", word.id);
    Ok(())
}

fn create_word(
    coll: &Collection,
    word: String,
    meaning: String,
    fields: WordFields,
    now: Timestamp,
) -> Fallible<Word> {
    let word = word.trim().to_string();
    let meaning = meaning.trim().to_string();
    if word.is_empty() || meaning.is_empty() {
        return fail("a word needs both a spelling and a meaning.");
    }
    let mut new = Word::new(word, meaning, now);
    new.example = fields.example;
    new.example_translation = fields.translation;
    new.category = fields.category;
    coll.db.insert_word(&new)?;
    Ok(new)
}

pub fn edit_word(directory: Option<String>, id: String, fields: WordFields) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let id = WordId::parse(&id)?;
    apply_edit(&coll, id, fields)?;
    println!("ok");
    Ok(())
}

fn apply_edit(coll: &Collection, id: WordId, fields: WordFields) -> Fallible<Word> {
    let Some(mut word) = coll.db.get_word(id)? else {
        return fail(format!("word not found: {id}"));
    };
    if let Some(spelling) = fields.word {
        word.word = spelling;
    }
    if let Some(meaning) = fields.meaning {
        word.meaning = meaning;
    }
    if fields.example.is_some() {
        word.example = fields.example;
    }
    if fields.translation.is_some() {
        word.example_translation = fields.translation;
    }
    if fields.category.is_some() {
        word.category = fields.category;
    }
    coll.db.update_word_content(&word)?;
    Ok(word)
}

pub fn remove_word(directory: Option<String>, id: String) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let id = WordId::parse(&id)?;
    coll.db.delete_word(id)?;
    println!("ok");
    Ok(())
}

pub fn list_words(directory: Option<String>, category: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let words = coll.db.all_words()?;
    for word in words.iter().filter(|w| match &category {
        Some(c) => w.category.as_ref() == Some(c),
        None => true,
    }) {
        println!("{}", format_word_line(word));
    }
    Ok(())
}

fn format_word_line(word: &Word) -> String {
    let mut line = format!(
        "{}  {:<8} stage={} {} = {}",
        word.id.short(),
        word.status.as_str(),
        word.stage,
        word.word,
        word.meaning
    );
    if let Some(category) = &word.category {
        line.push_str(&format!(" [{category}]"));
    }
    if word.learned_date.is_some() {
        line.push_str(&format!(" due {}", word.next_review_at));
    }
    line
}

pub fn print_due_count(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let words = coll.db.all_words()?;
    println!("{}", due_words(&words, Timestamp::now()).len());
    Ok(())
}
