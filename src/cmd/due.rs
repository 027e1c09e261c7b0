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
use crate::db::CardRecord;
use crate::error::Fallible;
use crate::types::timestamp::Timestamp;

pub fn list_due(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let due: Vec<CardRecord> = coll.db.due_cards(Timestamp::now())?;
    if due.is_empty() {
        println!("No cards due.");
        return Ok(());
    }
    for record in due {
        println!("{}", due_line(&record));
    }
    Ok(())
}

fn due_line(record: &CardRecord) -> String {
    format!(
        "{}  {:<8}  {}  {}",
        record.card.hash().short(),
        record.performance.state(),
        record.card.deck_name(),
        record.card.front()
    )
}
