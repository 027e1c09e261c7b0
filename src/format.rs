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

use chrono::Duration;

use crate::types::minutes::MINUTES_PER_DAY;
use crate::types::minutes::MINUTES_PER_HOUR;
use crate::types::minutes::MINUTES_PER_MONTH;
use crate::types::minutes::MINUTES_PER_YEAR;
use crate::types::minutes::Minutes;
use crate::types::timestamp::Timestamp;

/// Render an interval as a short human-readable string, e.g. `10m`, `3h`,
/// `12d`, `4mo`, `1.5y`.
pub fn format_interval(minutes: Minutes) -> String {
    let in_units = |unit: Minutes| f64::from(minutes) / f64::from(unit);
    if minutes < MINUTES_PER_HOUR {
        format!("{minutes}m")
    } else if minutes < MINUTES_PER_DAY {
        format!("{}h", in_units(MINUTES_PER_HOUR).round())
    } else if minutes < MINUTES_PER_MONTH {
        format!("{}d", in_units(MINUTES_PER_DAY).round())
    } else if minutes < MINUTES_PER_YEAR {
        format!("{}mo", in_units(MINUTES_PER_MONTH).round())
    } else {
        format!("{:.1}y", in_units(MINUTES_PER_YEAR))
    }
}

/// Whether a card reviewed at `updated_at` was reviewed less than a day
/// before `now`.
pub fn was_updated_today(updated_at: Timestamp, now: Timestamp) -> bool {
    now.since(updated_at) < Duration::hours(24)
}
