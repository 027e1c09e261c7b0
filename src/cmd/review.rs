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
use crate::format::was_updated_today;
use crate::scheduler::random::RandomSource;
use crate::scheduler::random::SeededRandom;
use crate::scheduler::random::ThreadRandom;
use crate::types::performance::Performance;
use crate::types::performance::ReviewedPerformance;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

pub fn review_card(
    directory: Option<String>,
    card: String,
    rating: Rating,
    seed: Option<u64>,
) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let next = apply_review(&mut coll, &card, rating, Timestamp::now(), rng.as_mut())?;
    println!(
        "{} -> {}, next review in {} ({}).",
        rating,
        next.state,
        format_interval(next.interval),
        next.due_date
    );
    Ok(())
}

/// Review the card identified by `prefix` and persist the result.
pub fn apply_review(
    coll: &mut Collection,
    prefix: &str,
    rating: Rating,
    now: Timestamp,
    rng: &mut dyn RandomSource,
) -> Fallible<ReviewedPerformance> {
    let hash = coll.db.find_card(prefix)?;
    let record = coll.db.get_card(hash)?;
    if let Performance::Reviewed(previous) = &record.performance {
        if was_updated_today(previous.updated_at, now) {
            log::info!("Card {} was already reviewed today.", hash.short());
        }
    }
    let next = coll.scheduler.review(&record.performance, rating, now, rng);
    log::debug!(
        "{} {} ease={:.2} interval={} state={} due={}",
        hash.short(),
        rating,
        next.ease,
        next.interval,
        next.state,
        next.due_date
    );
    coll.db.record_review(hash, rating, &next)?;
    Ok(next)
}
