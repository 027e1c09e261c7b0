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

use crate::types::card_state::CardState;
use crate::types::minutes::Minutes;
use crate::types::timestamp::Timestamp;

/// The ease a card starts out with before its first review.
pub const DEFAULT_EASE: f64 = 2.5;

/// Represents scheduling information for a card.
#[derive(Clone, PartialEq, Debug)]
pub enum Performance {
    /// The card is new, and has never been reviewed.
    New,
    /// The card has been reviewed at least once.
    Reviewed(ReviewedPerformance),
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReviewedPerformance {
    /// Multiplier controlling interval growth on success.
    pub ease: f64,
    /// Minutes from the last review until the card is due.
    pub interval: Minutes,
    pub state: CardState,
    /// When the card next becomes eligible for review.
    pub due_date: Timestamp,
    /// When the card was last reviewed.
    pub updated_at: Timestamp,
    /// Consecutive passing reviews.
    pub streak: u32,
    /// Failures while young or mature.
    pub leech_count: u32,
}

impl Performance {
    pub fn ease(&self) -> f64 {
        match self {
            Performance::New => DEFAULT_EASE,
            Performance::Reviewed(p) => p.ease,
        }
    }

    pub fn interval(&self) -> Minutes {
        match self {
            Performance::New => 0,
            Performance::Reviewed(p) => p.interval,
        }
    }

    pub fn state(&self) -> CardState {
        match self {
            Performance::New => CardState::New,
            Performance::Reviewed(p) => p.state,
        }
    }

    pub fn streak(&self) -> u32 {
        match self {
            Performance::New => 0,
            Performance::Reviewed(p) => p.streak,
        }
    }

    pub fn leech_count(&self) -> u32 {
        match self {
            Performance::New => 0,
            Performance::Reviewed(p) => p.leech_count,
        }
    }

    /// New cards are always due.
    pub fn is_due(&self, now: Timestamp) -> bool {
        match self {
            Performance::New => true,
            Performance::Reviewed(p) => p.due_date <= now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_new_defaults() {
        let p = Performance::New;
        assert_eq!(p.ease(), DEFAULT_EASE);
        assert_eq!(p.interval(), 0);
        assert_eq!(p.state(), CardState::New);
        assert_eq!(p.streak(), 0);
        assert_eq!(p.leech_count(), 0);
    }

    #[test]
    fn test_is_due() -> Fallible<()> {
        let now = Timestamp::parse("2025-03-01T12:00:00Z")?;
        assert!(Performance::New.is_due(now));
        let p = Performance::Reviewed(ReviewedPerformance {
            ease: 2.5,
            interval: 60,
            state: CardState::Learning,
            due_date: Timestamp::parse("2025-03-01T13:00:00Z")?,
            updated_at: Timestamp::parse("2025-03-01T12:00:00Z")?,
            streak: 1,
            leech_count: 0,
        });
        assert!(!p.is_due(now));
        assert!(p.is_due(now.plus_minutes(60)));
        Ok(())
    }
}
