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

use chrono::Duration;
use clap::ValueEnum;
use serde::Serialize;

use crate::collection::Collection;
use crate::db::CardRecord;
use crate::error::Fallible;
use crate::format::was_updated_today;
use crate::types::card_state::CardState;
use crate::types::performance::Performance;
use crate::types::timestamp::Timestamp;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_collection_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let stats = collection_stats(&coll, Timestamp::now())?;
    match format {
        StatsFormat::Text => {
            println!("cards:          {}", stats.card_count);
            println!("due:            {}", stats.due_count);
            println!("reviewed today: {}", stats.reviewed_today_count);
            println!("reviews today:  {}", stats.today_review_count);
            println!("new:            {}", stats.new_count);
            println!("learning:       {}", stats.learning_count);
            println!("young:          {}", stats.young_count);
            println!("mature:         {}", stats.mature_count);
            println!("relearn:        {}", stats.relearn_count);
            println!("leeches:        {}", stats.leech_count);
            match stats.average_ease {
                Some(ease) => println!("average ease:   {ease:.2}"),
                None => println!("average ease:   -"),
            }
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize, Default, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    card_count: usize,
    due_count: usize,
    /// Cards reviewed in the last 24 hours.
    reviewed_today_count: usize,
    /// Reviews recorded in the last 24 hours.
    today_review_count: usize,
    new_count: usize,
    learning_count: usize,
    young_count: usize,
    mature_count: usize,
    relearn_count: usize,
    leech_count: usize,
    average_ease: Option<f64>,
}

fn collection_stats(coll: &Collection, now: Timestamp) -> Fallible<Stats> {
    let cards: Vec<CardRecord> = coll.db.all_cards()?;
    let mut stats = Stats {
        card_count: cards.len(),
        today_review_count: coll
            .db
            .review_count_since(Timestamp::new(now.into_inner() - Duration::hours(24)))?,
        leech_count: coll.db.leeches(coll.settings.leech_threshold())?.len(),
        ..Default::default()
    };
    let mut ease_sum = 0.0;
    let mut reviewed = 0;
    for record in cards.iter() {
        let performance = &record.performance;
        if performance.is_due(now) {
            stats.due_count += 1;
        }
        match performance.state() {
            CardState::New => stats.new_count += 1,
            CardState::Learning => stats.learning_count += 1,
            CardState::Young => stats.young_count += 1,
            CardState::Mature => stats.mature_count += 1,
            CardState::Relearn => stats.relearn_count += 1,
        }
        if let Performance::Reviewed(p) = performance {
            ease_sum += p.ease;
            reviewed += 1;
            if was_updated_today(p.updated_at, now) {
                stats.reviewed_today_count += 1;
            }
        }
    }
    if reviewed > 0 {
        stats.average_ease = Some(ease_sum / reviewed as f64);
    }
    Ok(stats)
}
