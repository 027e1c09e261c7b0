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

use crate::error::Fallible;
use crate::error::fail;
use crate::types::minutes::Minutes;

/// Tuning parameters for the scheduler. Every field is required: defaults
/// are the caller's business.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct SchedulerConfig {
    pub ease_min: f64,
    pub ease_max: f64,
    /// Added to the ease on Good and Easy.
    pub ease_increment: f64,
    /// Subtracted from the ease on Fail.
    pub ease_decrement: f64,
    /// Added to the ease on Easy, on top of the increment.
    pub ease_bonus: f64,
    pub min_interval: Minutes,
    pub max_interval: Minutes,
    /// Intervals at or above this make a learning card young.
    pub young_boundary: Minutes,
    /// Intervals at or above this make a young card mature.
    pub mature_boundary: Minutes,
    /// Scales the fuzz magnitude. Zero disables fuzz.
    pub fuzz_factor: f64,
}

impl SchedulerConfig {
    pub fn validate(&self) -> Fallible<()> {
        let floats = [
            ("ease_min", self.ease_min),
            ("ease_max", self.ease_max),
            ("ease_increment", self.ease_increment),
            ("ease_decrement", self.ease_decrement),
            ("ease_bonus", self.ease_bonus),
            ("fuzz_factor", self.fuzz_factor),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return fail(format!("{name} must be a finite number."));
            }
            if value < 0.0 {
                return fail(format!("{name} must not be negative."));
            }
        }
        if self.ease_min <= 0.0 {
            return fail("ease_min must be positive.");
        }
        if self.ease_min > self.ease_max {
            return fail("ease_min must not exceed ease_max.");
        }
        if self.min_interval > self.max_interval {
            return fail("min_interval must not exceed max_interval.");
        }
        if self.young_boundary > self.mature_boundary {
            return fail("young_boundary must not exceed mature_boundary.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;

    #[test]
    fn test_defaults_are_valid() {
        let config = Settings::default().scheduler_config();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_ease_range() {
        let mut config = Settings::default().scheduler_config();
        config.ease_min = 3.0;
        config.ease_max = 2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_interval_range() {
        let mut config = Settings::default().scheduler_config();
        config.min_interval = 100;
        config.max_interval = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_boundaries() {
        let mut config = Settings::default().scheduler_config();
        config.young_boundary = config.mature_boundary + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_and_negative() {
        let mut config = Settings::default().scheduler_config();
        config.fuzz_factor = f64::NAN;
        assert!(config.validate().is_err());
        let mut config = Settings::default().scheduler_config();
        config.ease_bonus = -0.1;
        assert!(config.validate().is_err());
        let mut config = Settings::default().scheduler_config();
        config.ease_min = 0.0;
        assert!(config.validate().is_err());
    }
}
