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

use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;
use crate::srs::WordUpdate;
use crate::types::date::Date;
use crate::types::timestamp::Timestamp;
use crate::types::word_id::WordId;

/// Where a word stands in the learning process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    /// Never completed in a learning session.
    New,
    Learning,
    Review,
    Mastered,
}

impl WordStatus {
    pub const ALL: [WordStatus; 4] = [
        WordStatus::New,
        WordStatus::Learning,
        WordStatus::Review,
        WordStatus::Mastered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WordStatus::New => "new",
            WordStatus::Learning => "learning",
            WordStatus::Review => "review",
            WordStatus::Mastered => "mastered",
        }
    }
}

impl Display for WordStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for WordStatus {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "new" => Ok(WordStatus::New),
            "learning" => Ok(WordStatus::Learning),
            "review" => Ok(WordStatus::Review),
            "mastered" => Ok(WordStatus::Mastered),
            _ => fail(format!("Invalid word status: {}", value)),
        }
    }
}

impl ToSql for WordStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for WordStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let string: String = FromSql::column_result(value)?;
        WordStatus::try_from(string).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: WordId,
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    pub example_translation: Option<String>,
    pub category: Option<String>,
    pub status: WordStatus,
    /// Consecutive correct review cycles survived.
    pub stage: u32,
    pub next_review_at: Timestamp,
    /// The interval that produced `next_review_at`.
    pub interval_minutes: u32,
    /// The first day the word left `New`. Never overwritten once set.
    pub learned_date: Option<Date>,
}

impl Word {
    /// A fresh word that has never been studied.
    pub fn new(word: impl Into<String>, meaning: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id: WordId::random(),
            word: word.into(),
            meaning: meaning.into(),
            example: None,
            example_translation: None,
            category: None,
            status: WordStatus::New,
            stage: 0,
            next_review_at: created_at,
            interval_minutes: 0,
            learned_date: None,
        }
    }

    pub fn is_due(&self, now: Timestamp) -> bool {
        self.status != WordStatus::New && self.next_review_at <= now
    }

    /// Merge a scheduler update into this word.
    pub fn apply(&mut self, update: &WordUpdate) {
        self.status = update.status;
        self.stage = update.stage;
        self.next_review_at = update.next_review_at;
        self.interval_minutes = update.interval_minutes;
        self.learned_date = update.learned_date;
    }
}
