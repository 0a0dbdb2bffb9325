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

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::srs::due_words;
use crate::types::date::Date;
use crate::types::stats::DailyStats;
use crate::types::timestamp::Timestamp;
use crate::types::word::Word;
use crate::types::word::WordStatus;

pub fn print_stats(directory: Option<String>, date: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let now = Timestamp::now();
    let date = match date {
        Some(date) => Date::parse(&date)?,
        None => now.local_date(),
    };
    let stats = get_stats(&coll, date, now)?;
    let stats_json = serde_json::to_string_pretty(&stats)?;
    println!("{}", stats_json);
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    day: DailyStats,
    word_count: usize,
    due_count: usize,
    new_count: usize,
    learning_count: usize,
    review_count: usize,
    mastered_count: usize,
}

fn get_stats(coll: &Collection, date: Date, now: Timestamp) -> Fallible<Stats> {
    let words: Vec<Word> = coll.db.all_words()?;
    let count = |status: WordStatus| words.iter().filter(|w| w.status == status).count();
    Ok(Stats {
        day: coll.db.get_daily_stats(date)?,
        word_count: words.len(),
        due_count: due_words(&words, now).len(),
        new_count: count(WordStatus::New),
        learning_count: count(WordStatus::Learning),
        review_count: count(WordStatus::Review),
        mastered_count: count(WordStatus::Mastered),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::types::stats::StatsDelta;

    #[test]
    fn test_stats() -> Fallible<()> {
        let dir = tempdir()?;
        let coll = Collection::new(Some(dir.path().display().to_string()))?;
        let now = Timestamp::from_millis(1_700_000_000_000)?;
        let date = Date::parse("2023-11-14")?;
        coll.db.insert_word(&Word::new("hund", "dog", now))?;
        let mut due = Word::new("katze", "cat", now);
        due.status = WordStatus::Review;
        due.next_review_at = now;
        coll.db.insert_word(&due)?;
        coll.db.add_daily_stats(
            date,
            StatsDelta {
                time_seconds: 120,
                learned: 1,
                reviewed: 0,
            },
        )?;
        let stats = get_stats(&coll, date, now)?;
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.due_count, 1);
        assert_eq!(stats.new_count, 1);
        assert_eq!(stats.review_count, 1);
        assert_eq!(stats.day.time_seconds, 120);
        let json = serde_json::to_string(&stats)?;
        assert!(json.contains("\"timeSeconds\":120"));
        assert!(json.contains("\"date\":\"2023-11-14\""));
        Ok(())
    }
}
