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

use crate::types::card_state::CardState;
use crate::types::minutes::Minutes;
use crate::types::rating::Rating;

/// Compute a card's state after a review, given the interval the review
/// produced.
///
/// Failing a young or mature card demotes it to relearn; failing any other
/// card leaves its state alone. Passing cards move up the ladder
/// new → learning → young → mature one rung at a time, with relearning
/// cards rejoining at whichever rung their interval reaches.
pub fn next_state(
    current: CardState,
    rating: Rating,
    new_interval: Minutes,
    young_boundary: Minutes,
    mature_boundary: Minutes,
) -> CardState {
    if !rating.is_pass() {
        return match current {
            CardState::Young | CardState::Mature => CardState::Relearn,
            other => other,
        };
    }
    let reaches_mature = new_interval >= mature_boundary;
    let reaches_young = new_interval >= young_boundary && !reaches_mature;
    match current {
        CardState::New => CardState::Learning,
        CardState::Learning if reaches_young || reaches_mature => CardState::Young,
        CardState::Relearn if reaches_young => CardState::Young,
        CardState::Young | CardState::Relearn if reaches_mature => CardState::Mature,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CardState::*;
    use Rating::*;

    const YOUNG: Minutes = 1440;
    const MATURE: Minutes = 30240;

    #[test]
    fn test_transition_table() {
        let table: &[(CardState, Rating, Minutes, CardState)] = &[
            // New cards always start learning on a pass.
            (New, Hard, 10, Learning),
            (New, Good, YOUNG, Learning),
            (New, Easy, MATURE, Learning),
            (New, Fail, 10, New),
            // Learning.
            (Learning, Good, YOUNG - 1, Learning),
            (Learning, Good, YOUNG, Young),
            (Learning, Easy, YOUNG + 1, Young),
            (Learning, Good, MATURE - 1, Young),
            (Learning, Good, MATURE, Young),
            (Learning, Fail, 10, Learning),
            // Young.
            (Young, Hard, YOUNG - 1, Young),
            (Young, Good, MATURE - 1, Young),
            (Young, Good, MATURE, Mature),
            (Young, Easy, MATURE + 1, Mature),
            (Young, Fail, 10, Relearn),
            // Mature.
            (Mature, Hard, MATURE - 1, Mature),
            (Mature, Good, MATURE * 2, Mature),
            (Mature, Fail, 10, Relearn),
            // Relearn.
            (Relearn, Good, YOUNG - 1, Relearn),
            (Relearn, Good, YOUNG, Young),
            (Relearn, Good, MATURE - 1, Young),
            (Relearn, Good, MATURE, Mature),
            (Relearn, Fail, 10, Relearn),
        ];
        for &(current, rating, interval, expected) in table {
            let actual = next_state(current, rating, interval, YOUNG, MATURE);
            assert_eq!(
                actual, expected,
                "({current}, {rating}, {interval}) should be {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn test_fail_never_demotes_to_new() {
        for state in CardState::ALL {
            let next = next_state(state, Fail, 10, YOUNG, MATURE);
            if state != New {
                assert_ne!(next, New);
            }
        }
    }

    #[test]
    fn test_equal_boundaries() {
        assert_eq!(next_state(Relearn, Good, 100, 100, 100), Mature);
        assert_eq!(next_state(Learning, Good, 100, 100, 100), Young);
        assert_eq!(next_state(Young, Good, 100, 100, 100), Mature);
    }
}
