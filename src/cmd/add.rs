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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::card::Card;
use crate::types::card_hash::CardHash;
use crate::types::timestamp::Timestamp;

pub fn add_card(directory: Option<String>, deck: String, front: String, back: String) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let hash = insert_card(&mut coll, deck, front, back, Timestamp::now())?;
    println!("{}", hash.short());
    Ok(())
}

fn insert_card(
    coll: &mut Collection,
    deck: String,
    front: String,
    back: String,
    now: Timestamp,
) -> Fallible<CardHash> {
    let card = Card::new(deck, front, back)?;
    coll.db.add_card(&card, now)?;
    Ok(card.hash())
}
