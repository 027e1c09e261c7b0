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

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card_hash::CardHash;

/// A card's content. Scheduling information is stored alongside it in the
/// database, but lives in `Performance`.
#[derive(Clone, PartialEq, Debug)]
pub struct Card {
    /// The name of the deck this card belongs to.
    deck_name: String,
    front: String,
    back: String,
    /// The cached hash of the card's content.
    hash: CardHash,
}

impl Card {
    pub fn new(
        deck_name: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Fallible<Self> {
        let deck_name = deck_name.into().trim().to_string();
        let front = front.into().trim().to_string();
        let back = back.into().trim().to_string();
        if deck_name.is_empty() {
            return fail("deck name is empty.");
        }
        if front.is_empty() {
            return fail("card front is empty.");
        }
        if back.is_empty() {
            return fail("card back is empty.");
        }
        let hash = CardHash::digest(&[&deck_name, &front, &back]);
        Ok(Self {
            deck_name,
            front,
            back,
            hash,
        })
    }

    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn hash(&self) -> CardHash {
        self.hash
    }
}
