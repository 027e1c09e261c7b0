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

/// A coarse maturity bucket for a card.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    New,
    Learning,
    Young,
    Mature,
    /// A young or mature card that was failed and is being relearned.
    Relearn,
}

impl CardState {
    pub const ALL: [CardState; 5] = [
        CardState::New,
        CardState::Learning,
        CardState::Young,
        CardState::Mature,
        CardState::Relearn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardState::New => "new",
            CardState::Learning => "learning",
            CardState::Young => "young",
            CardState::Mature => "mature",
            CardState::Relearn => "relearn",
        }
    }

    /// Whether a failure in this state counts towards the card's leech count.
    pub fn is_promoted(self) -> bool {
        matches!(self, CardState::Young | CardState::Mature)
    }
}

impl Display for CardState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl TryFrom<String> for CardState {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "new" => Ok(CardState::New),
            "learning" => Ok(CardState::Learning),
            "young" => Ok(CardState::Young),
            "mature" => Ok(CardState::Mature),
            "relearn" => Ok(CardState::Relearn),
            _ => fail(format!("Invalid card state: {}", value)),
        }
    }
}

impl ToSql for CardState {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for CardState {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let string: String = FromSql::column_result(value)?;
        CardState::try_from(string).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_conversion() {
        for state in CardState::ALL {
            let parsed = CardState::try_from(state.as_str().to_string());
            assert!(matches!(parsed, Ok(s) if s == state));
        }
        assert!(CardState::try_from("graduated".to_string()).is_err());
    }
}
