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

//! The collection's settings file. Every key is optional; missing keys fall
//! back to the defaults below.

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::scheduler::config::SchedulerConfig;
use crate::types::minutes::MINUTES_PER_DAY;
use crate::types::minutes::Minutes;

pub const SETTINGS_FILE_NAME: &str = "teenycards.toml";

const DEFAULT_EASE_MIN: f64 = 1.3;
const DEFAULT_EASE_MAX: f64 = 5.0;
const DEFAULT_EASE_INCREMENT: f64 = 0.01;
const DEFAULT_EASE_DECREMENT: f64 = 0.05;
const DEFAULT_EASE_BONUS: f64 = 0.05;
const DEFAULT_MIN_INTERVAL: Minutes = 10;
const DEFAULT_MAX_INTERVAL: Minutes = 365 * MINUTES_PER_DAY;
const DEFAULT_YOUNG_BOUNDARY: Minutes = MINUTES_PER_DAY;
const DEFAULT_MATURE_BOUNDARY: Minutes = 21 * MINUTES_PER_DAY;
const DEFAULT_FUZZ_FACTOR: f64 = 1.0;
const DEFAULT_LEECH_THRESHOLD: u32 = 8;

#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    scheduler: SchedulerSettings,
    /// Cards failed this many times after maturing are reported as leeches.
    leech_threshold: Option<u32>,
}

#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
struct SchedulerSettings {
    ease_min: Option<f64>,
    ease_max: Option<f64>,
    ease_increment: Option<f64>,
    ease_decrement: Option<f64>,
    ease_bonus: Option<f64>,
    min_interval: Option<Minutes>,
    max_interval: Option<Minutes>,
    young_boundary: Option<Minutes>,
    mature_boundary: Option<Minutes>,
    fuzz_factor: Option<f64>,
}

impl Settings {
    /// Load settings from `directory`. A missing file means all defaults.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(SETTINGS_FILE_NAME);
        if !path.exists() {
            log::debug!("No settings file, using defaults.");
            return Ok(Self::default());
        }
        log::debug!("Loading settings from {}", path.display());
        let content = read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        let s = &self.scheduler;
        SchedulerConfig {
            ease_min: s.ease_min.unwrap_or(DEFAULT_EASE_MIN),
            ease_max: s.ease_max.unwrap_or(DEFAULT_EASE_MAX),
            ease_increment: s.ease_increment.unwrap_or(DEFAULT_EASE_INCREMENT),
            ease_decrement: s.ease_decrement.unwrap_or(DEFAULT_EASE_DECREMENT),
            ease_bonus: s.ease_bonus.unwrap_or(DEFAULT_EASE_BONUS),
            min_interval: s.min_interval.unwrap_or(DEFAULT_MIN_INTERVAL),
            max_interval: s.max_interval.unwrap_or(DEFAULT_MAX_INTERVAL),
            young_boundary: s.young_boundary.unwrap_or(DEFAULT_YOUNG_BOUNDARY),
            mature_boundary: s.mature_boundary.unwrap_or(DEFAULT_MATURE_BOUNDARY),
            fuzz_factor: s.fuzz_factor.unwrap_or(DEFAULT_FUZZ_FACTOR),
        }
    }

    pub fn leech_threshold(&self) -> u32 {
        self.leech_threshold.unwrap_or(DEFAULT_LEECH_THRESHOLD)
    }
}
