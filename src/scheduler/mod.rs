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

pub mod calculator;
pub mod config;
pub mod fuzz;
pub mod random;
pub mod state;

use serde::Serialize;

use crate::error::Fallible;
use crate::format::format_interval;
use crate::scheduler::calculator::calculate_ease;
use crate::scheduler::calculator::calculate_interval;
use crate::scheduler::config::SchedulerConfig;
use crate::scheduler::random::FixedRandom;
use crate::scheduler::random::RandomSource;
use crate::scheduler::state::next_state;
use crate::types::minutes::Minutes;
use crate::types::performance::Performance;
use crate::types::performance::ReviewedPerformance;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

/// Computes the next scheduling snapshot for a card. Holds no state besides
/// its configuration, so one scheduler can be shared freely.
#[derive(Clone, Debug)]
pub struct Scheduler {
    config: SchedulerConfig,
}

/// What a rating would do to a card, shown before the user commits to it.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Preview {
    pub rating: Rating,
    pub interval: Minutes,
    pub formatted: String,
}

impl Scheduler {
    /// Create a scheduler. Fails if the configuration is inconsistent.
    pub fn new(config: SchedulerConfig) -> Fallible<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Review a card. Returns a complete replacement snapshot; the input is
    /// left untouched.
    pub fn review(
        &self,
        performance: &Performance,
        rating: Rating,
        now: Timestamp,
        rng: &mut dyn RandomSource,
    ) -> ReviewedPerformance {
        let ease = calculate_ease(&self.config, performance.ease(), rating);
        let interval = calculate_interval(&self.config, performance.interval(), rating, ease, rng);
        let due_date = now.plus_minutes(interval);
        let current = performance.state();
        let state = next_state(
            current,
            rating,
            interval,
            self.config.young_boundary,
            self.config.mature_boundary,
        );
        let (streak, leech_count) = if rating.is_pass() {
            (performance.streak().saturating_add(1), performance.leech_count())
        } else if current.is_promoted() {
            (0, performance.leech_count().saturating_add(1))
        } else {
            (0, performance.leech_count())
        };
        ReviewedPerformance {
            ease,
            interval,
            state,
            due_date,
            updated_at: now,
            streak,
            leech_count,
        }
    }

    /// The interval each rating would produce, without fuzz.
    pub fn preview(&self, performance: &Performance) -> Vec<Preview> {
        let mut rng = FixedRandom::midpoint();
        Rating::ALL
            .iter()
            .map(|&rating| {
                let ease = calculate_ease(&self.config, performance.ease(), rating);
                let interval =
                    calculate_interval(&self.config, performance.interval(), rating, ease, &mut rng);
                Preview {
                    rating,
                    interval,
                    formatted: format_interval(interval),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::scheduler::calculator::RELEARN_INTERVAL;
    use crate::scheduler::random::SeededRandom;
    use crate::types::card_state::CardState;

    fn scheduler() -> Scheduler {
        Scheduler::new(Settings::default().scheduler_config()).unwrap()
    }

    fn now() -> Timestamp {
        Timestamp::parse("2025-06-01T09:00:00Z").unwrap()
    }

    fn learning_card() -> Performance {
        Performance::Reviewed(ReviewedPerformance {
            ease: 2.5,
            interval: 60,
            state: CardState::Learning,
            due_date: now(),
            updated_at: now(),
            streak: 2,
            leech_count: 0,
        })
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Settings::default().scheduler_config();
        config.ease_min = 10.0;
        assert!(Scheduler::new(config).is_err());
    }

    #[test]
    fn test_good_review() {
        let s = scheduler();
        let next = s.review(&learning_card(), Rating::Good, now(), &mut FixedRandom::midpoint());
        assert_eq!(next.interval, 150);
        assert!(approx(next.ease, 2.51));
        assert_eq!(next.state, CardState::Learning);
        assert_eq!(next.updated_at, now());
        assert_eq!(next.due_date, now().plus_minutes(150));
        assert_eq!(next.streak, 3);
    }

    #[test]
    fn test_fail_review() {
        let s = scheduler();
        let next = s.review(&learning_card(), Rating::Fail, now(), &mut FixedRandom::midpoint());
        assert_eq!(next.interval, RELEARN_INTERVAL);
        assert!(approx(next.ease, 2.45));
        assert_eq!(next.state, CardState::Learning);
        assert_eq!(next.streak, 0);
        assert_eq!(next.leech_count, 0);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let s = scheduler();
        let card = learning_card();
        let before = card.clone();
        let _ = s.review(&card, Rating::Easy, now(), &mut FixedRandom::midpoint());
        assert_eq!(card, before);
    }

    #[test]
    fn test_new_card_defaults() {
        let s = scheduler();
        let next = s.review(&Performance::New, Rating::Hard, now(), &mut FixedRandom::midpoint());
        assert_eq!(next.state, CardState::Learning);
        assert!(approx(next.ease, 2.5));
        assert_eq!(next.interval, s.config().min_interval);
        assert_eq!(next.streak, 1);
    }

    #[test]
    fn test_failing_mature_card_counts_leech() {
        let s = scheduler();
        let card = Performance::Reviewed(ReviewedPerformance {
            ease: 2.8,
            interval: 40_000,
            state: CardState::Mature,
            due_date: now(),
            updated_at: now(),
            streak: 6,
            leech_count: 1,
        });
        let next = s.review(&card, Rating::Fail, now(), &mut FixedRandom::midpoint());
        assert_eq!(next.state, CardState::Relearn);
        assert_eq!(next.interval, RELEARN_INTERVAL);
        assert_eq!(next.leech_count, 2);
        assert_eq!(next.streak, 0);
    }

    #[test]
    fn test_saturation() {
        let s = scheduler();
        let config = s.config().clone();
        let top = Performance::Reviewed(ReviewedPerformance {
            ease: config.ease_max,
            interval: config.max_interval,
            state: CardState::Mature,
            due_date: now(),
            updated_at: now(),
            streak: 10,
            leech_count: 0,
        });
        let next = s.review(&top, Rating::Easy, now(), &mut FixedRandom(0.99));
        assert_eq!(next.ease, config.ease_max);
        assert_eq!(next.interval, config.max_interval);

        let bottom = Performance::Reviewed(ReviewedPerformance {
            ease: config.ease_min,
            ..match top {
                Performance::Reviewed(p) => p,
                Performance::New => unreachable!(),
            }
        });
        let next = s.review(&bottom, Rating::Fail, now(), &mut FixedRandom(0.99));
        assert_eq!(next.ease, config.ease_min);
    }

    #[test]
    fn test_repeated_reviews_keep_invariants() {
        let s = scheduler();
        let config = s.config().clone();
        let mut rng = SeededRandom::new(1234);
        let pattern = [
            Rating::Good,
            Rating::Easy,
            Rating::Good,
            Rating::Fail,
            Rating::Hard,
            Rating::Easy,
            Rating::Easy,
            Rating::Good,
        ];
        let mut performance = Performance::New;
        let mut time = now();
        for i in 0..400 {
            let rating = pattern[i % pattern.len()];
            let next = s.review(&performance, rating, time, &mut rng);
            assert!(next.ease >= config.ease_min && next.ease <= config.ease_max);
            assert!(next.interval >= config.min_interval);
            assert!(next.interval <= config.max_interval);
            assert_eq!(next.due_date, time.plus_minutes(next.interval));
            if rating == Rating::Fail {
                assert_eq!(next.interval, RELEARN_INTERVAL);
            }
            time = next.due_date;
            performance = Performance::Reviewed(next);
        }
    }

    #[test]
    fn test_promotion_ladder() {
        let s = scheduler();
        let mut rng = FixedRandom::midpoint();
        let mut performance = Performance::New;
        let mut seen = vec![];
        for _ in 0..20 {
            let next = s.review(&performance, Rating::Easy, now(), &mut rng);
            if seen.last() != Some(&next.state) {
                seen.push(next.state);
            }
            performance = Performance::Reviewed(next);
        }
        assert_eq!(
            seen,
            vec![CardState::Learning, CardState::Young, CardState::Mature]
        );
    }

    #[test]
    fn test_preview() {
        let s = scheduler();
        let previews = s.preview(&learning_card());
        let ratings: Vec<Rating> = previews.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, Rating::ALL.to_vec());
        assert_eq!(previews[0].interval, RELEARN_INTERVAL);
        assert_eq!(previews[0].formatted, "10m");
        assert_eq!(previews[2].interval, 150);
        assert_eq!(previews[2].formatted, "3h");
    }

    #[test]
    fn test_preview_matches_unfuzzed_review() {
        let s = scheduler();
        let card = learning_card();
        for preview in s.preview(&card) {
            let next = s.review(&card, preview.rating, now(), &mut FixedRandom::midpoint());
            assert_eq!(preview.interval, next.interval);
        }
    }
}
