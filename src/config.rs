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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::drill::select::DEFAULT_BATCH_SIZE;
use crate::error::Fallible;

pub const CONFIG_FILE_NAME: &str = "vocabdrill.toml";

/// Per-collection settings, read from `vocabdrill.toml`. Every field is
/// optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Words per learn or review session.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// How long a completed word can be undone.
    #[serde(default = "default_undo_window_secs")]
    pub undo_window_secs: u32,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_undo_window_secs() -> u32 {
    5
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            undo_window_secs: default_undo_window_secs(),
        }
    }
}

impl Config {
    /// Load the configuration from a collection directory. A missing file
    /// means the defaults.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("No {CONFIG_FILE_NAME}, using defaults.");
            return Ok(Self::default());
        }
        let content = read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

impl SessionConfig {
    pub fn undo_window_ms(&self) -> i64 {
        i64::from(self.undo_window_secs) * 1000
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_empty_file_is_default() -> Fallible<()> {
        assert_eq!(Config::parse("")?, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_section() -> Fallible<()> {
        let config = Config::parse("[session]\nbatch_size = 5\n")?;
        assert_eq!(config.session.batch_size, 5);
        assert_eq!(config.session.undo_window_secs, 5);
        assert_eq!(config.session.undo_window_ms(), 5_000);
        Ok(())
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        assert!(Config::parse("[session]\nbatchsize = 5\n").is_err());
    }

    #[test]
    fn test_load_from_directory() -> Fallible<()> {
        let dir = tempdir()?;
        assert_eq!(Config::load(dir.path())?, Config::default());
        write(
            dir.path().join(CONFIG_FILE_NAME),
            "[session]\nundo_window_secs = 10\n",
        )?;
        let config = Config::load(dir.path())?;
        assert_eq!(config.session.undo_window_secs, 10);
        assert_eq!(config.session.batch_size, DEFAULT_BATCH_SIZE);
        Ok(())
    }
}
