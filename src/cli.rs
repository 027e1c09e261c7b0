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

use clap::Parser;

use crate::cmd::add::add_card;
use crate::cmd::delete::delete_card;
use crate::cmd::due::list_due;
use crate::cmd::export::export_collection;
use crate::cmd::preview::preview_card;
use crate::cmd::review::review_card;
use crate::cmd::settings::print_settings;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_collection_stats;
use crate::cmd::undo::undo_review;
use crate::error::Fallible;
use crate::types::rating::Rating;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Add a card to the collection.
    Add {
        /// The card's question.
        front: String,
        /// The card's answer.
        back: String,
        /// Path to the collection directory. Defaults to the current directory.
        directory: Option<String>,
        /// The deck the card belongs to.
        #[arg(long, default_value = "Default")]
        deck: String,
    },
    /// List the cards that are due for review.
    Due {
        /// Path to the collection directory. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Review a card and schedule its next review.
    Review {
        /// The card's hash, or an unambiguous prefix of it.
        card: String,
        /// How well the card was recalled.
        rating: Rating,
        /// Path to the collection directory. Defaults to the current directory.
        directory: Option<String>,
        /// Seed for the interval fuzz, for reproducible scheduling.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the interval each rating would give a card.
    Preview {
        /// The card's hash, or an unambiguous prefix of it.
        card: String,
        /// Path to the collection directory. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Revert a card's most recent review.
    Undo {
        /// The card's hash, or an unambiguous prefix of it.
        card: String,
        /// Path to the collection directory. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Delete a card and its review history.
    Delete {
        /// The card's hash, or an unambiguous prefix of it.
        card: String,
        /// Path to the collection directory. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Print collection statistics.
    Stats {
        /// Path to the collection directory. Defaults to the current directory.
        directory: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Export cards and review history as JSON.
    Export {
        /// Path to the collection directory. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Print the settings in effect, including defaults.
    Settings {
        /// Path to the collection directory. Defaults to the current directory.
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Add {
            front,
            back,
            directory,
            deck,
        } => add_card(directory, deck, front, back),
        Command::Due { directory } => list_due(directory),
        Command::Review {
            card,
            rating,
            directory,
            seed,
        } => review_card(directory, card, rating, seed),
        Command::Preview { card, directory } => preview_card(directory, card),
        Command::Undo { card, directory } => undo_review(directory, card),
        Command::Delete { card, directory } => delete_card(directory, card),
        Command::Stats { directory, format } => print_collection_stats(directory, format),
        Command::Export { directory } => export_collection(directory),
        Command::Settings { directory } => print_settings(directory),
    }
}
