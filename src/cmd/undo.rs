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
use crate::format::format_interval;
use crate::types::performance::Performance;

pub fn undo_review(directory: Option<String>, card: String) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let hash = coll.db.find_card(&card)?;
    match coll.db.undo_last_review(hash)? {
        Performance::New => println!("{} is new again.", hash.short()),
        Performance::Reviewed(p) => println!(
            "{} restored: {}, interval {}, due {}.",
            hash.short(),
            p.state,
            format_interval(p.interval),
            p.due_date
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::cmd::review::apply_review;
    use crate::scheduler::random::FixedRandom;
    use crate::types::card::Card;
    use crate::types::rating::Rating;
    use crate::types::timestamp::Timestamp;

    #[test]
    fn test_undo_review() -> Fallible<()> {
        let dir = tempdir()?;
        let directory = Some(dir.path().display().to_string());
        let mut coll = Collection::new(directory.clone())?;
        let card = Card::new("Geography", "Capital of Peru?", "Lima")?;
        coll.db.add_card(&card, Timestamp::now())?;
        apply_review(
            &mut coll,
            &card.hash().short(),
            Rating::Good,
            Timestamp::now(),
            &mut FixedRandom::midpoint(),
        )?;
        drop(coll);

        undo_review(directory.clone(), card.hash().short())?;
        let coll = Collection::new(directory.clone())?;
        assert_eq!(coll.db.get_card(card.hash())?.performance, Performance::New);
        drop(coll);

        assert!(undo_review(directory, card.hash().short()).is_err());
        Ok(())
    }
}
