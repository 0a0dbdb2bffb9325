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
use uuid::Uuid;

use crate::error::Fallible;

/// Opaque identifier of a word. Unlike a content hash, it survives edits to
/// the word's text.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WordId {
    inner: Uuid,
}

impl WordId {
    pub fn random() -> Self {
        Self {
            inner: Uuid::new_v4(),
        }
    }

    pub fn parse(s: &str) -> Fallible<Self> {
        let inner = Uuid::parse_str(s.trim())?;
        Ok(Self { inner })
    }

    /// The first eight hex digits, for log lines.
    pub fn short(&self) -> String {
        let mut s = self.inner.simple().to_string();
        s.truncate(8);
        s
    }
}

impl ToSql for WordId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for WordId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let string: String = FromSql::column_result(value)?;
        WordId::parse(&string).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl Display for WordId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Serialize for WordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
