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
use crate::scheduler::Preview;

pub fn preview_card(directory: Option<String>, card: String) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    for preview in previews(&coll, &card)? {
        println!("{:<4}  {}", preview.rating, preview.formatted);
    }
    Ok(())
}

fn previews(coll: &Collection, prefix: &str) -> Fallible<Vec<Preview>> {
    let hash = coll.db.find_card(prefix)?;
    let record = coll.db.get_card(hash)?;
    Ok(coll.scheduler.preview(&record.performance))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::types::card::Card;
    use crate::types::rating::Rating;
    use crate::types::timestamp::Timestamp;

    #[test]
    fn test_previews_of_new_card() -> Fallible<()> {
        let dir = tempdir()?;
        let mut coll = Collection::new(Some(dir.path().display().to_string()))?;
        let card = Card::new("Geography", "Capital of Peru?", "Lima")?;
        coll.db.add_card(&card, Timestamp::now())?;
        let previews = previews(&coll, &card.hash().short())?;
        assert_eq!(previews.len(), 4);
        assert_eq!(previews[0].rating, Rating::Fail);
        // A new card has no interval to grow, so every rating lands on the
        // minimum.
        for preview in previews {
            assert_eq!(preview.interval, coll.scheduler.config().min_interval);
            assert_eq!(preview.formatted, "10m");
        }
        Ok(())
    }

    #[test]
    fn test_preview_does_not_persist() -> Fallible<()> {
        let dir = tempdir()?;
        let directory = Some(dir.path().display().to_string());
        let mut coll = Collection::new(directory.clone())?;
        let card = Card::new("Geography", "Capital of Peru?", "Lima")?;
        coll.db.add_card(&card, Timestamp::now())?;
        drop(coll);
        preview_card(directory.clone(), card.hash().short())?;
        let coll = Collection::new(directory)?;
        assert!(coll.db.reviews()?.is_empty());
        Ok(())
    }
}
