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

use crate::scheduler::config::SchedulerConfig;
use crate::scheduler::fuzz::get_fuzz;
use crate::scheduler::random::RandomSource;
use crate::types::minutes::Minutes;
use crate::types::performance::DEFAULT_EASE;
use crate::types::rating::Rating;

/// The interval a failed card is reset to.
pub const RELEARN_INTERVAL: Minutes = 10;

/// Interval multiplier for Hard.
const HARD_MULTIPLIER: f64 = 1.15;

/// Added to the ease when computing the interval for Easy.
const EASY_INTERVAL_BONUS: f64 = 0.15;

pub fn calculate_ease(config: &SchedulerConfig, current_ease: f64, rating: Rating) -> f64 {
    let current_ease = if current_ease.is_finite() {
        current_ease
    } else {
        DEFAULT_EASE
    };
    let ease = match rating {
        Rating::Fail => current_ease - config.ease_decrement,
        Rating::Hard => current_ease,
        Rating::Good => current_ease + config.ease_increment,
        Rating::Easy => current_ease + config.ease_increment + config.ease_bonus,
    };
    ease.clamp(config.ease_min, config.ease_max)
}

/// Compute the next interval. `new_ease` must be the ease *after* this
/// rating was applied.
pub fn calculate_interval(
    config: &SchedulerConfig,
    current_interval: Minutes,
    rating: Rating,
    new_ease: f64,
    rng: &mut dyn RandomSource,
) -> Minutes {
    let current = f64::from(current_interval);
    let base = match rating {
        Rating::Fail => return clamp_interval(config, f64::from(RELEARN_INTERVAL)),
        Rating::Hard => current * HARD_MULTIPLIER,
        Rating::Good => current * new_ease,
        Rating::Easy => current * (new_ease + EASY_INTERVAL_BONUS),
    };
    let fuzz = get_fuzz(base, config.fuzz_factor, rng);
    clamp_interval(config, (base + fuzz).floor())
}

fn clamp_interval(config: &SchedulerConfig, minutes: f64) -> Minutes {
    let min = f64::from(config.min_interval);
    let max = f64::from(config.max_interval);
    minutes.clamp(min, max) as Minutes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::scheduler::random::FixedRandom;

    fn config() -> SchedulerConfig {
        Settings::default().scheduler_config()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_ease_per_rating() {
        let c = config();
        assert!(approx(calculate_ease(&c, 2.5, Rating::Fail), 2.5 - c.ease_decrement));
        assert!(approx(calculate_ease(&c, 2.5, Rating::Hard), 2.5));
        assert!(approx(calculate_ease(&c, 2.5, Rating::Good), 2.5 + c.ease_increment));
        assert!(approx(
            calculate_ease(&c, 2.5, Rating::Easy),
            2.5 + c.ease_increment + c.ease_bonus
        ));
    }

    #[test]
    fn test_ease_saturates() {
        let c = config();
        assert_eq!(calculate_ease(&c, c.ease_max, Rating::Easy), c.ease_max);
        assert_eq!(calculate_ease(&c, c.ease_min, Rating::Fail), c.ease_min);
    }

    #[test]
    fn test_out_of_range_ease_is_clamped() {
        let c = config();
        assert_eq!(calculate_ease(&c, 100.0, Rating::Hard), c.ease_max);
        assert_eq!(calculate_ease(&c, 0.1, Rating::Hard), c.ease_min);
        assert!(approx(calculate_ease(&c, f64::NAN, Rating::Hard), DEFAULT_EASE));
    }

    #[test]
    fn test_fail_resets_interval() {
        let c = config();
        for current in [0, 10, 60, 1440, 100_000, c.max_interval] {
            for draw in [0.0, 0.5, 0.99] {
                let interval =
                    calculate_interval(&c, current, Rating::Fail, 2.5, &mut FixedRandom(draw));
                assert_eq!(interval, RELEARN_INTERVAL);
            }
        }
    }

    #[test]
    fn test_interval_without_fuzz() {
        let c = config();
        let mut rng = FixedRandom::midpoint();
        // 103.5, 225 and 238.5 before flooring.
        assert_eq!(calculate_interval(&c, 90, Rating::Hard, 2.5, &mut rng), 103);
        assert_eq!(calculate_interval(&c, 90, Rating::Good, 2.5, &mut rng), 225);
        assert_eq!(calculate_interval(&c, 90, Rating::Easy, 2.5, &mut rng), 238);
    }

    #[test]
    fn test_interval_uses_new_ease() {
        let c = config();
        let mut rng = FixedRandom::midpoint();
        let new_ease = calculate_ease(&c, 2.5, Rating::Good);
        // 60 * 2.51 = 150.6
        assert_eq!(calculate_interval(&c, 60, Rating::Good, new_ease, &mut rng), 150);
    }

    #[test]
    fn test_interval_saturates() {
        let c = config();
        let mut rng = FixedRandom(1.0);
        assert_eq!(
            calculate_interval(&c, c.max_interval, Rating::Easy, c.ease_max, &mut rng),
            c.max_interval
        );
        let mut rng = FixedRandom(0.0);
        assert_eq!(
            calculate_interval(&c, 0, Rating::Good, 2.5, &mut rng),
            c.min_interval
        );
    }
}
