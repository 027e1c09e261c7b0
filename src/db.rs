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

use std::collections::HashSet;

use rusqlite::Connection;
use rusqlite::Row;
use rusqlite::Transaction;
use rusqlite::config::DbConfig;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::card_hash::CardHash;
use crate::types::card_state::CardState;
use crate::types::minutes::Minutes;
use crate::types::performance::Performance;
use crate::types::performance::ReviewedPerformance;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

const CARD_COLUMNS: &str = "card_hash, deck_name, front, back, added_at, ease, interval_minutes, state, due_date, updated_at, streak, leech_count";

pub struct Database {
    conn: Connection,
}

/// A card together with its current scheduling information.
pub struct CardRecord {
    pub card: Card,
    pub added_at: Timestamp,
    pub performance: Performance,
}

/// An entry in the review log: the rating given, and the snapshot it
/// produced.
pub struct ReviewRecord {
    pub card_hash: CardHash,
    pub rating: Rating,
    pub performance: ReviewedPerformance,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let conn = Connection::open(database_path)?;
        Self::from_connection(conn)
    }

    #[cfg(test)]
    pub fn in_memory() -> Fallible<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Fallible<Self> {
        conn.set_db_config(DbConfig::SQLITE_DBCONFIG_ENABLE_FKEY, true)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating database schema.");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }

    /// Insert a new card in the database.
    ///
    /// If a card with the same hash exists, returns an error.
    pub fn add_card(&mut self, card: &Card, added_at: Timestamp) -> Fallible<()> {
        log::debug!("Adding new card: {}", card.hash());
        let tx = self.conn.transaction()?;
        let exists: i64 = tx.query_row(
            "select count(*) from cards where card_hash = ?;",
            [card.hash()],
            |row| row.get(0),
        )?;
        if exists > 0 {
            return fail(format!("card {} already exists.", card.hash().short()));
        }
        let sql = "insert into cards (card_hash, deck_name, front, back, added_at, state) values (?, ?, ?, ?, ?, ?);";
        tx.execute(
            sql,
            (
                card.hash(),
                card.deck_name(),
                card.front(),
                card.back(),
                added_at,
                CardState::New,
            ),
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Return the set of all card hashes in the database.
    pub fn card_hashes(&self) -> Fallible<HashSet<CardHash>> {
        let mut hashes = HashSet::new();
        let mut stmt = self.conn.prepare("select card_hash from cards;")?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let hash: CardHash = row.get(0)?;
            hashes.insert(hash);
        }
        Ok(hashes)
    }

    pub fn card_count(&self) -> Fallible<usize> {
        let count: i64 = self
            .conn
            .query_row("select count(*) from cards;", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get a card and its scheduling information.
    ///
    /// If no card with the given hash exists, returns an error.
    pub fn get_card(&self, card_hash: CardHash) -> Fallible<CardRecord> {
        let sql = format!("select {CARD_COLUMNS} from cards where card_hash = ?;");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([card_hash])?;
        match rows.next()? {
            Some(row) => read_card(row),
            None => fail(format!("no card with hash {}.", card_hash.short())),
        }
    }

    /// Resolve a (possibly abbreviated) hex hash to the unique card it
    /// identifies.
    pub fn find_card(&self, prefix: &str) -> Fallible<CardHash> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return fail(format!("invalid card hash: {prefix}"));
        }
        let mut stmt = self
            .conn
            .prepare("select card_hash from cards where card_hash like ? || '%' limit 2;")?;
        let mut rows = stmt.query([&prefix])?;
        let mut matches: Vec<CardHash> = Vec::new();
        while let Some(row) = rows.next()? {
            matches.push(row.get(0)?);
        }
        match matches.as_slice() {
            [hash] => Ok(*hash),
            [] => fail(format!("no card matches {prefix}.")),
            _ => fail(format!("{prefix} matches more than one card.")),
        }
    }

    /// All cards, in the order they were added.
    pub fn all_cards(&self) -> Fallible<Vec<CardRecord>> {
        let sql = format!("select {CARD_COLUMNS} from cards order by added_at, card_hash;");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut cards = Vec::new();
        while let Some(row) = rows.next()? {
            cards.push(read_card(row)?);
        }
        Ok(cards)
    }

    /// Find the cards due at `now`: reviewed cards whose due date has passed,
    /// most overdue first, followed by new cards.
    pub fn due_cards(&self, now: Timestamp) -> Fallible<Vec<CardRecord>> {
        let mut due: Vec<CardRecord> = self
            .all_cards()?
            .into_iter()
            .filter(|record| record.performance.is_due(now))
            .collect();
        // Stable, so new cards keep the order they were added in.
        due.sort_by_key(|record| match &record.performance {
            Performance::Reviewed(p) => (0, Some(p.due_date)),
            Performance::New => (1, None),
        });
        Ok(due)
    }

    /// Replace a card's scheduling information with the result of a review,
    /// and append the review to the log.
    ///
    /// If no card with the given hash exists, returns an error.
    pub fn record_review(
        &mut self,
        card_hash: CardHash,
        rating: Rating,
        performance: &ReviewedPerformance,
    ) -> Fallible<()> {
        let tx = self.conn.transaction()?;
        update_card_performance(&tx, card_hash, &Performance::Reviewed(performance.clone()))?;
        let sql = "insert into reviews (card_hash, rating, ease, interval_minutes, state, due_date, reviewed_at, streak, leech_count) values (?, ?, ?, ?, ?, ?, ?, ?, ?);";
        tx.execute(
            sql,
            (
                card_hash,
                rating,
                performance.ease,
                performance.interval,
                performance.state,
                performance.due_date,
                performance.updated_at,
                performance.streak,
                performance.leech_count,
            ),
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Revert a card's most recent review, restoring the snapshot from the
    /// review before it (or making the card new again). Returns the restored
    /// performance.
    pub fn undo_last_review(&mut self, card_hash: CardHash) -> Fallible<Performance> {
        let tx = self.conn.transaction()?;
        let latest: Option<i64> = {
            let mut stmt = tx.prepare(
                "select review_id from reviews where card_hash = ? order by review_id desc limit 1;",
            )?;
            let mut rows = stmt.query([card_hash])?;
            match rows.next()? {
                Some(row) => Some(row.get(0)?),
                None => None,
            }
        };
        let Some(review_id) = latest else {
            return fail(format!("card {} has no reviews to undo.", card_hash.short()));
        };
        tx.execute("delete from reviews where review_id = ?;", [review_id])?;
        let previous: Performance = {
            let sql = "select ease, interval_minutes, state, due_date, reviewed_at, streak, leech_count from reviews where card_hash = ? order by review_id desc limit 1;";
            let mut stmt = tx.prepare(sql)?;
            let mut rows = stmt.query([card_hash])?;
            match rows.next()? {
                Some(row) => Performance::Reviewed(read_review_snapshot(row)?),
                None => Performance::New,
            }
        };
        update_card_performance(&tx, card_hash, &previous)?;
        tx.commit()?;
        Ok(previous)
    }

    /// Delete a card and its review log.
    ///
    /// If no card with the given hash exists, returns an error.
    pub fn delete_card(&mut self, card_hash: CardHash) -> Fallible<()> {
        let tx = self.conn.transaction()?;
        let deleted = tx.execute("delete from cards where card_hash = ?;", [card_hash])?;
        if deleted == 0 {
            return fail(format!("no card with hash {}.", card_hash.short()));
        }
        tx.commit()?;
        Ok(())
    }

    /// The full review log, oldest first.
    pub fn reviews(&self) -> Fallible<Vec<ReviewRecord>> {
        let sql = "select ease, interval_minutes, state, due_date, reviewed_at, streak, leech_count, card_hash, rating from reviews order by review_id;";
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next()? {
            let performance = read_review_snapshot(row)?;
            reviews.push(ReviewRecord {
                card_hash: row.get(7)?,
                rating: row.get(8)?,
                performance,
            });
        }
        Ok(reviews)
    }

    /// The number of reviews recorded since `since`.
    pub fn review_count_since(&self, since: Timestamp) -> Fallible<usize> {
        let count = self
            .reviews()?
            .iter()
            .filter(|review| review.performance.updated_at >= since)
            .count();
        Ok(count)
    }

    /// Cards failed at least `threshold` times after maturing.
    pub fn leeches(&self, threshold: u32) -> Fallible<Vec<CardRecord>> {
        let sql = format!(
            "select {CARD_COLUMNS} from cards where leech_count >= ? order by leech_count desc, card_hash;"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([threshold])?;
        let mut cards = Vec::new();
        while let Some(row) = rows.next()? {
            cards.push(read_card(row)?);
        }
        Ok(cards)
    }
}

fn read_card(row: &Row) -> Fallible<CardRecord> {
    let card_hash: CardHash = row.get(0)?;
    let deck_name: String = row.get(1)?;
    let front: String = row.get(2)?;
    let back: String = row.get(3)?;
    let added_at: Timestamp = row.get(4)?;
    let ease: Option<f64> = row.get(5)?;
    let interval: Option<Minutes> = row.get(6)?;
    let state: CardState = row.get(7)?;
    let due_date: Option<Timestamp> = row.get(8)?;
    let updated_at: Option<Timestamp> = row.get(9)?;
    let streak: u32 = row.get(10)?;
    let leech_count: u32 = row.get(11)?;

    let card = Card::new(deck_name, front, back)?;
    if card.hash() != card_hash {
        return fail(format!(
            "card {} does not match its stored content.",
            card_hash.short()
        ));
    }
    let performance = match (updated_at, ease, interval, due_date) {
        (None, _, _, _) => Performance::New,
        (Some(updated_at), Some(ease), Some(interval), Some(due_date)) => {
            Performance::Reviewed(ReviewedPerformance {
                ease,
                interval,
                state,
                due_date,
                updated_at,
                streak,
                leech_count,
            })
        }
        _ => {
            return fail(format!(
                "card {} has incomplete scheduling information.",
                card_hash.short()
            ));
        }
    };
    Ok(CardRecord {
        card,
        added_at,
        performance,
    })
}

/// Reads the first seven columns of a review row.
fn read_review_snapshot(row: &Row) -> Fallible<ReviewedPerformance> {
    Ok(ReviewedPerformance {
        ease: row.get(0)?,
        interval: row.get(1)?,
        state: row.get(2)?,
        due_date: row.get(3)?,
        updated_at: row.get(4)?,
        streak: row.get(5)?,
        leech_count: row.get(6)?,
    })
}

/// Overwrite every scheduling field of a card at once.
fn update_card_performance(
    tx: &Transaction,
    card_hash: CardHash,
    performance: &Performance,
) -> Fallible<()> {
    let sql = "update cards set ease = ?, interval_minutes = ?, state = ?, due_date = ?, updated_at = ?, streak = ?, leech_count = ? where card_hash = ?;";
    let updated = match performance {
        Performance::New => tx.execute(
            sql,
            (
                None::<f64>,
                None::<Minutes>,
                CardState::New,
                None::<Timestamp>,
                None::<Timestamp>,
                0,
                0,
                card_hash,
            ),
        )?,
        Performance::Reviewed(p) => tx.execute(
            sql,
            (
                p.ease,
                p.interval,
                p.state,
                p.due_date,
                p.updated_at,
                p.streak,
                p.leech_count,
                card_hash,
            ),
        )?,
    };
    if updated == 0 {
        return fail(format!("no card with hash {}.", card_hash.short()));
    }
    Ok(())
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["cards"], |row| row.get(0))?;
    Ok(count > 0)
}
