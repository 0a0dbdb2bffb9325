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

use crate::types::date::Date;

/// Study totals for one calendar day.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: Date,
    pub time_seconds: i64,
    pub learned: i64,
    pub reviewed: i64,
}

impl DailyStats {
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            time_seconds: 0,
            learned: 0,
            reviewed: 0,
        }
    }
}

/// A change to a day's totals, as produced by one session. Undone
/// completions are never counted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StatsDelta {
    pub time_seconds: i64,
    pub learned: i64,
    pub reviewed: i64,
}

impl StatsDelta {
    pub fn is_zero(&self) -> bool {
        self.time_seconds == 0 && self.learned == 0 && self.reviewed == 0
    }
}
