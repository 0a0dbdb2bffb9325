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

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Row;
use rusqlite::Transaction;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::date::Date;
use crate::types::stats::DailyStats;
use crate::types::stats::StatsDelta;
use crate::types::word::Word;
use crate::types::word_id::WordId;

const WORD_COLUMNS: &str = "word_id, word, meaning, example, example_translation, category, status, stage, next_review_at, interval_minutes, learned_date";

/// The word store and the stats store.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating database schema.");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }

    /// Return every word, in the order they were added.
    pub fn all_words(&self) -> Fallible<Vec<Word>> {
        let sql = format!("select {WORD_COLUMNS} from words order by rowid;");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut words = Vec::new();
        while let Some(row) = rows.next()? {
            words.push(read_word(row)?);
        }
        Ok(words)
    }

    pub fn get_word(&self, id: WordId) -> Fallible<Option<Word>> {
        let sql = format!("select {WORD_COLUMNS} from words where word_id = ?;");
        let word = self.conn.query_row(&sql, [id], read_word).optional()?;
        Ok(word)
    }

    /// Insert a new word.
    ///
    /// If a word with the same ID exists, returns an error.
    pub fn insert_word(&self, word: &Word) -> Fallible<()> {
        log::debug!("Adding new word: {}", word.id);
        let sql = format!(
            "insert into words ({WORD_COLUMNS}) values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?);"
        );
        self.conn.execute(
            &sql,
            (
                word.id,
                &word.word,
                &word.meaning,
                &word.example,
                &word.example_translation,
                &word.category,
                word.status,
                word.stage,
                word.next_review_at,
                word.interval_minutes,
                word.learned_date,
            ),
        )?;
        Ok(())
    }

    /// Delete a word.
    ///
    /// If no word with the given ID exists, returns an error.
    pub fn delete_word(&self, id: WordId) -> Fallible<()> {
        let count = self
            .conn
            .execute("delete from words where word_id = ?;", [id])?;
        expect_one(count, id)
    }

    /// Update a word's text fields, leaving its schedule alone.
    ///
    /// If no word with the given ID exists, returns an error.
    pub fn update_word_content(&self, word: &Word) -> Fallible<()> {
        let sql = "update words set word = ?, meaning = ?, example = ?, example_translation = ?, category = ? where word_id = ?;";
        let count = self.conn.execute(
            sql,
            (
                &word.word,
                &word.meaning,
                &word.example,
                &word.example_translation,
                &word.category,
                word.id,
            ),
        )?;
        expect_one(count, word.id)
    }

    /// Write back a word's scheduling fields after an answer or an undo.
    ///
    /// If no word with the given ID exists, returns an error.
    pub fn save_word_schedule(&self, word: &Word) -> Fallible<()> {
        let sql = "update words set status = ?, stage = ?, next_review_at = ?, interval_minutes = ?, learned_date = ? where word_id = ?;";
        let count = self.conn.execute(
            sql,
            (
                word.status,
                word.stage,
                word.next_review_at,
                word.interval_minutes,
                word.learned_date,
                word.id,
            ),
        )?;
        expect_one(count, word.id)
    }

    /// The totals for a day. Days without activity are all zeroes.
    pub fn get_daily_stats(&self, date: Date) -> Fallible<DailyStats> {
        let sql = "select date, time_seconds, learned, reviewed from daily_stats where date = ?;";
        let stats = self
            .conn
            .query_row(sql, [date], read_daily_stats)
            .optional()?;
        Ok(stats.unwrap_or_else(|| DailyStats::empty(date)))
    }

    /// Every day with recorded activity, oldest first.
    pub fn all_daily_stats(&self) -> Fallible<Vec<DailyStats>> {
        let sql = "select date, time_seconds, learned, reviewed from daily_stats order by date;";
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut stats = Vec::new();
        while let Some(row) = rows.next()? {
            stats.push(read_daily_stats(row)?);
        }
        Ok(stats)
    }

    /// Add a delta to a day's totals.
    pub fn add_daily_stats(&self, date: Date, delta: StatsDelta) -> Fallible<()> {
        if delta.is_zero() {
            return Ok(());
        }
        log::debug!(
            "Stats for {date}: +{}s learned={:+} reviewed={:+}",
            delta.time_seconds,
            delta.learned,
            delta.reviewed
        );
        let sql = "insert into daily_stats (date, time_seconds, learned, reviewed) values (?, ?, ?, ?) on conflict (date) do update set time_seconds = time_seconds + excluded.time_seconds, learned = learned + excluded.learned, reviewed = reviewed + excluded.reviewed;";
        self.conn.execute(
            sql,
            (date, delta.time_seconds, delta.learned, delta.reviewed),
        )?;
        Ok(())
    }
}

fn read_word(row: &Row) -> rusqlite::Result<Word> {
    Ok(Word {
        id: row.get(0)?,
        word: row.get(1)?,
        meaning: row.get(2)?,
        example: row.get(3)?,
        example_translation: row.get(4)?,
        category: row.get(5)?,
        status: row.get(6)?,
        stage: row.get(7)?,
        next_review_at: row.get(8)?,
        interval_minutes: row.get(9)?,
        learned_date: row.get(10)?,
    })
}

fn read_daily_stats(row: &Row) -> rusqlite::Result<DailyStats> {
    Ok(DailyStats {
        date: row.get(0)?,
        time_seconds: row.get(1)?,
        learned: row.get(2)?,
        reviewed: row.get(3)?,
    })
}

fn expect_one(count: usize, id: WordId) -> Fallible<()> {
    if count == 0 {
        fail(format!("word not found: {id}"))
    } else {
        Ok(())
    }
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["words"], |row| row.get(0))?;
    Ok(count > 0)
}
