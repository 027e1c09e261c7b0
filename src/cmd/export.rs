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

use crate::collection::Collection;
use crate::db::CardRecord;
use crate::db::ReviewRecord;
use crate::error::Fallible;
use crate::types::card_hash::CardHash;
use crate::types::performance::Performance;
use crate::types::performance::ReviewedPerformance;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

pub fn export_collection(directory: Option<String>) -> Fallible<()> {
    let coll: Collection = Collection::new(directory)?;
    let export: Export = get_export(&coll)?;
    let json: String = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export {
    cards: Vec<CardExport>,
    reviews: Vec<ReviewExport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardExport {
    hash: CardHash,
    deck_name: String,
    front: String,
    back: String,
    added_at: Timestamp,
    /// Absent for new cards.
    performance: Option<ReviewedPerformance>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewExport {
    hash: CardHash,
    rating: Rating,
    #[serde(flatten)]
    performance: ReviewedPerformance,
}

fn get_export(coll: &Collection) -> Fallible<Export> {
    let cards: Vec<CardExport> = coll
        .db
        .all_cards()?
        .into_iter()
        .map(card_export)
        .collect();
    let reviews: Vec<ReviewExport> = coll
        .db
        .reviews()?
        .into_iter()
        .map(review_export)
        .collect();
    Ok(Export { cards, reviews })
}

fn card_export(record: CardRecord) -> CardExport {
    CardExport {
        hash: record.card.hash(),
        deck_name: record.card.deck_name().to_owned(),
        front: record.card.front().to_owned(),
        back: record.card.back().to_owned(),
        added_at: record.added_at,
        performance: match record.performance {
            Performance::New => None,
            Performance::Reviewed(p) => Some(p),
        },
    }
}

fn review_export(review: ReviewRecord) -> ReviewExport {
    ReviewExport {
        hash: review.card_hash,
        rating: review.rating,
        performance: review.performance,
    }
}
