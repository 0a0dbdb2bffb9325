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

//! A line-oriented terminal front end for the session engine.

use std::io::BufRead;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;

use rand::Rng;
use rand::thread_rng;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::collection::Collection;
use crate::drill::mode::Mode;
use crate::drill::mode::Phase;
use crate::drill::select::Selection;
use crate::drill::select::select_words;
use crate::drill::session::Answer;
use crate::drill::session::Session;
use crate::drill::session::SessionStats;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::date::Date;
use crate::types::word::Word;

const UNDO_COMMAND: &str = ":undo";

pub fn drill(
    directory: Option<String>,
    mode: Mode,
    batch: Option<usize>,
    cohort: Option<Date>,
    category: Option<String>,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let selection = Selection {
        batch_size: batch.unwrap_or(coll.config.session.batch_size),
        cohort,
        category,
    };
    let input = stdin().lock();
    let output = stdout().lock();
    let mut rng = thread_rng();
    run_drill(&coll, mode, &selection, &SystemClock, &mut rng, input, output)?;
    Ok(())
}

/// What the learner did at a prompt.
enum Input {
    Answer(bool),
    Undo,
    Continue,
    Quit,
}

/// Run one session against the collection, reading answers from `input`.
/// Every completion, mistake and undo is written back as it happens; the
/// day's stats are updated when the session ends or the input runs out.
pub fn run_drill<R: BufRead, W: Write, G: Rng + ?Sized>(
    coll: &Collection,
    mode: Mode,
    selection: &Selection,
    clock: &dyn Clock,
    rng: &mut G,
    mut input: R,
    mut output: W,
) -> Fallible<SessionStats> {
    let started_at = clock.now();
    let today = started_at.local_date();
    let words: Vec<Word> = coll.db.all_words()?;
    let selected = select_words(&words, mode, started_at, selection);
    if selected.is_empty() {
        writeln!(output, "Nothing to study in {mode} mode.")?;
        return Ok(SessionStats::default());
    }
    let mut session = Session::new(mode, selected, words, today)
        .with_undo_window(coll.config.session.undo_window_ms());
    run_session(coll, &mut session, clock, rng, &mut input, &mut output)
}

/// Drive `session` to completion or end of input. The stats delta is
/// persisted even if a write-back fails midway.
fn run_session<R: BufRead, W: Write, G: Rng + ?Sized>(
    coll: &Collection,
    session: &mut Session,
    clock: &dyn Clock,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Fallible<SessionStats> {
    let outcome = answer_loop(coll, session, clock, rng, input, output);
    coll.db.add_daily_stats(session.today(), session.stats_delta())?;
    outcome?;

    let stats = session.stats();
    if session.is_complete() {
        writeln!(output, "Session completed.")?;
    }
    writeln!(
        output,
        "Completed {} of {} words ({} learned, {} reviewed) in {}s.",
        stats.completed,
        session.total(),
        stats.learned,
        stats.reviewed,
        stats.elapsed_seconds
    )?;
    Ok(stats)
}

fn answer_loop<R: BufRead, W: Write, G: Rng + ?Sized>(
    coll: &Collection,
    session: &mut Session,
    clock: &dyn Clock,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Fallible<()> {
    while let Some(phase) = session.phase() {
        let prompt_at = clock.now();
        session.expire_undo(prompt_at);
        let action = prompt(session, phase, rng, input, output)?;
        let answered_at = clock.now();
        let spent = answered_at.as_millis() - prompt_at.as_millis();
        session.tick(u64::try_from(spent).unwrap_or(0));
        match action {
            Input::Answer(correct) => match session.submit(correct, answered_at) {
                Some(Answer::Completed { word }) => {
                    coll.db.save_word_schedule(&word)?;
                    writeln!(
                        output,
                        "Correct. Next review in {} ({}).",
                        describe_interval(word.interval_minutes),
                        word.next_review_at
                    )?;
                    if session.can_undo(answered_at) {
                        writeln!(output, "Type {UNDO_COMMAND} to take that back.")?;
                    }
                }
                Some(Answer::Mistake { word }) => {
                    coll.db.save_word_schedule(&word)?;
                }
                Some(Answer::NextStage) | None => {}
            },
            Input::Undo => match session.undo(answered_at) {
                Some(word) => {
                    coll.db.save_word_schedule(&word)?;
                    writeln!(output, "Undone: {}", word.word)?;
                }
                None => {
                    writeln!(output, "Nothing to undo.")?;
                }
            },
            Input::Continue => session.acknowledge(),
            Input::Quit => break,
        }
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write, G: Rng + ?Sized>(
    session: &Session,
    phase: Phase,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Fallible<Input> {
    let Some(current) = session.current() else {
        return Ok(Input::Quit);
    };
    let word = &current.word;
    let progress = format!(
        "[{}/{}]",
        session.total() - session.remaining() + 1,
        session.total()
    );
    match phase {
        Phase::Recall => {
            writeln!(output, "{progress} {}", word.word)?;
            writeln!(output, "(press Enter to reveal)")?;
            match read_line(input)? {
                None => return Ok(Input::Quit),
                Some(line) if line == UNDO_COMMAND => return Ok(Input::Undo),
                Some(_) => {}
            }
            writeln!(output, "= {}", word.meaning)?;
            write_example(word, output)?;
            ask_yes_no("Did you remember it?", input, output)
        }
        Phase::Select => {
            let choices = session
                .choices(rng)
                .ok_or_else(|| ErrorReport::new("not enough words for multiple choice"))?;
            writeln!(output, "{progress} {}", word.word)?;
            for (i, choice) in choices.options.iter().enumerate() {
                writeln!(output, "  {}) {}", i + 1, choice.meaning)?;
            }
            loop {
                writeln!(output, "Pick 1-{}:", choices.options.len())?;
                let Some(line) = read_line(input)? else {
                    return Ok(Input::Quit);
                };
                if line == UNDO_COMMAND {
                    return Ok(Input::Undo);
                }
                match line.parse::<usize>() {
                    Ok(n) if (1..=choices.options.len()).contains(&n) => {
                        return Ok(Input::Answer(choices.is_correct(n - 1)));
                    }
                    _ => writeln!(output, "Invalid choice.")?,
                }
            }
        }
        Phase::Spell => {
            writeln!(output, "{progress} {}", word.meaning)?;
            if let Some(translation) = &word.example_translation {
                writeln!(output, "  {translation}")?;
            }
            writeln!(output, "Type the word:")?;
            match read_line(input)? {
                None => Ok(Input::Quit),
                Some(line) if line == UNDO_COMMAND => Ok(Input::Undo),
                Some(line) => Ok(Input::Answer(spelled_correctly(&line, &word.word))),
            }
        }
        Phase::Immersive => {
            writeln!(output, "{progress} {} = {}", word.word, word.meaning)?;
            write_example(word, output)?;
            ask_yes_no("Got it?", input, output)
        }
        Phase::Feedback => {
            writeln!(output, "Wrong. {} = {}", word.word, word.meaning)?;
            write_example(word, output)?;
            writeln!(output, "(press Enter to continue)")?;
            match read_line(input)? {
                None => Ok(Input::Quit),
                Some(_) => Ok(Input::Continue),
            }
        }
    }
}

fn ask_yes_no<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> Fallible<Input> {
    loop {
        writeln!(output, "{question} [y/n]")?;
        let Some(line) = read_line(input)? else {
            return Ok(Input::Quit);
        };
        match line.to_lowercase().as_str() {
            "y" | "yes" => return Ok(Input::Answer(true)),
            "n" | "no" => return Ok(Input::Answer(false)),
            UNDO_COMMAND => return Ok(Input::Undo),
            _ => writeln!(output, "Please answer y or n.")?,
        }
    }
}

fn write_example<W: Write>(word: &Word, output: &mut W) -> Fallible<()> {
    if let Some(example) = &word.example {
        writeln!(output, "  {example}")?;
        if let Some(translation) = &word.example_translation {
            writeln!(output, "  {translation}")?;
        }
    }
    Ok(())
}

/// Read one trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Fallible<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn spelled_correctly(answer: &str, word: &str) -> bool {
    answer.trim().to_lowercase() == word.trim().to_lowercase()
}

fn describe_interval(minutes: u32) -> String {
    match minutes {
        0 => "now".to_string(),
        m if m < 60 => format!("{m} min"),
        m if m < 1440 => format!("{} h", m / 60),
        m => format!("{} d", m / 1440),
    }
}
