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

/// Scheduling intervals are measured in whole minutes.
pub type Minutes = u32;

pub const MINUTES_PER_HOUR: Minutes = 60;

pub const MINUTES_PER_DAY: Minutes = 24 * MINUTES_PER_HOUR;

/// A month, for display purposes, is thirty days.
pub const MINUTES_PER_MONTH: Minutes = 30 * MINUTES_PER_DAY;

pub const MINUTES_PER_YEAR: Minutes = 365 * MINUTES_PER_DAY;
