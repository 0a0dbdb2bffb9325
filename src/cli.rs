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

use clap::Parser;

use crate::cmd::drill::drill;
use crate::cmd::export::export_collection;
use crate::cmd::stats::print_stats;
use crate::cmd::words::WordFields;
use crate::cmd::words::add_word;
use crate::cmd::words::edit_word;
use crate::cmd::words::list_words;
use crate::cmd::words::print_due_count;
use crate::cmd::words::remove_word;
use crate::drill::mode::Mode;
use crate::error::Fallible;
use crate::types::date::Date;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Study words.
    Drill {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// The kind of session.
        #[arg(long, value_enum, default_value_t = Mode::Learn)]
        mode: Mode,
        /// Only review words first learned on this day (YYYY-MM-DD).
        #[arg(long)]
        cohort: Option<String>,
        /// Only study words in this category.
        #[arg(long)]
        category: Option<String>,
        /// Words per session. Defaults to the configured batch size.
        #[arg(long)]
        batch: Option<usize>,
    },
    /// Add a word to the collection.
    Add {
        word: String,
        meaning: String,
        #[arg(long)]
        example: Option<String>,
        #[arg(long)]
        translation: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Optional path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Change a word's text without touching its schedule.
    Edit {
        id: String,
        #[arg(long)]
        word: Option<String>,
        #[arg(long)]
        meaning: Option<String>,
        #[arg(long)]
        example: Option<String>,
        #[arg(long)]
        translation: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Optional path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Remove a word from the collection.
    Remove {
        id: String,
        /// Optional path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
    /// List the words in the collection.
    List {
        /// Optional path to the collection directory.
        directory: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the number of words due for review.
    Due {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Print collection statistics as JSON.
    Stats {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// The day to report (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    /// Export the collection as JSON.
    Export {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            directory,
            mode,
            cohort,
            category,
            batch,
        } => {
            let cohort = match cohort {
                Some(cohort) => Some(Date::parse(&cohort)?),
                None => None,
            };
            drill(directory, mode, batch, cohort, category)
        }
        Command::Add {
            word,
            meaning,
            example,
            translation,
            category,
            directory,
        } => {
            let fields = WordFields {
                word: None,
                meaning: None,
                example,
                translation,
                category,
            };
            add_word(directory, word, meaning, fields)
        }
        Command::Edit {
            id,
            word,
            meaning,
            example,
            translation,
            category,
            directory,
        } => {
            let fields = WordFields {
                word,
                meaning,
                example,
                translation,
                category,
            };
            edit_word(directory, id, fields)
        }
        Command::Remove { id, directory } => remove_word(directory, id),
        Command::List {
            directory,
            category,
        } => list_words(directory, category),
        Command::Due { directory } => print_due_count(directory),
        Command::Stats { directory, date } => print_stats(directory, date),
        Command::Export { directory } => export_collection(directory),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Command::command().debug_assert();
    }

    #[test]
    fn test_parse_drill() {
        let cli = Command::parse_from(["vocabdrill", "drill", "--mode", "review-all"]);
        match cli {
            Command::Drill { mode, batch, .. } => {
                assert_eq!(mode, Mode::ReviewAll);
                assert_eq!(batch, None);
            }
            _ => panic!("expected drill"),
        }
    }
}
