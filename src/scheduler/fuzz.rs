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

//! Random jitter added to computed intervals, so that cards introduced
//! together do not keep coming due together.

use crate::scheduler::random::RandomSource;

/// The smallest fuzz magnitude, in minutes.
pub const MIN_FUZZ: f64 = 5.0;

/// The largest fuzz magnitude, in minutes: half a day.
pub const MAX_FUZZ: f64 = 720.0;

/// The fuzz magnitude for an interval, before scaling by the fuzz factor.
/// Grows logarithmically from `MIN_FUZZ` and saturates at `MAX_FUZZ` once
/// the interval reaches `MAX_FUZZ` minutes.
pub fn fuzz_magnitude(interval: f64) -> f64 {
    let scale = if interval > 1.0 {
        (interval.ln() / MAX_FUZZ.ln()).min(1.0)
    } else {
        0.0
    };
    MIN_FUZZ + (MAX_FUZZ - MIN_FUZZ) * scale
}

/// A uniform offset in `[-magnitude, +magnitude]` minutes, rounded to two
/// decimal places.
pub fn get_fuzz(interval: f64, fuzz_factor: f64, rng: &mut dyn RandomSource) -> f64 {
    let magnitude = fuzz_magnitude(interval) * fuzz_factor;
    let draw = rng.next_unit().clamp(0.0, 1.0);
    let fuzz = -magnitude + 2.0 * magnitude * draw;
    (fuzz * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::random::FixedRandom;

    #[test]
    fn test_midpoint_draw_is_zero() {
        for interval in [0.0, 10.0, 150.0, 10_000.0] {
            assert_eq!(get_fuzz(interval, 1.0, &mut FixedRandom::midpoint()), 0.0);
        }
    }

    #[test]
    fn test_sign_follows_draw() {
        assert!(get_fuzz(150.0, 1.0, &mut FixedRandom(0.75)) > 0.0);
        assert!(get_fuzz(150.0, 1.0, &mut FixedRandom(0.25)) < 0.0);
    }

    #[test]
    fn test_extreme_draws_reach_magnitude() {
        let magnitude = fuzz_magnitude(10_000.0);
        assert_eq!(magnitude, MAX_FUZZ);
        assert_eq!(get_fuzz(10_000.0, 1.0, &mut FixedRandom(0.0)), -MAX_FUZZ);
        assert_eq!(get_fuzz(10_000.0, 1.0, &mut FixedRandom(1.0)), MAX_FUZZ);
    }

    #[test]
    fn test_magnitude_bounds() {
        assert_eq!(fuzz_magnitude(0.0), MIN_FUZZ);
        assert_eq!(fuzz_magnitude(1.0), MIN_FUZZ);
        assert_eq!(fuzz_magnitude(MAX_FUZZ), MAX_FUZZ);
        assert_eq!(fuzz_magnitude(1_000_000.0), MAX_FUZZ);
        let mut previous = fuzz_magnitude(1.0);
        for interval in [2.0, 10.0, 60.0, 300.0, 719.0] {
            let magnitude = fuzz_magnitude(interval);
            assert!(magnitude > previous);
            assert!(magnitude < MAX_FUZZ);
            previous = magnitude;
        }
    }

    #[test]
    fn test_fuzz_factor_scales() {
        let full = get_fuzz(10_000.0, 1.0, &mut FixedRandom(1.0));
        let half = get_fuzz(10_000.0, 0.5, &mut FixedRandom(1.0));
        assert_eq!(half, full / 2.0);
        assert_eq!(get_fuzz(10_000.0, 0.0, &mut FixedRandom(1.0)), 0.0);
    }

    #[test]
    fn test_rounded_to_two_places() {
        let fuzz = get_fuzz(150.0, 1.0, &mut FixedRandom(0.123456));
        assert_eq!((fuzz * 100.0).round() / 100.0, fuzz);
    }
}
