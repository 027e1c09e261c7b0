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

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A source of uniform draws in `[0, 1)`, injected into the scheduler so
/// fuzz can be made deterministic.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Draws from the thread-local RNG.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// A reproducible RNG, for replaying a sequence of reviews.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Always returns the same draw.
pub struct FixedRandom(pub f64);

impl FixedRandom {
    /// The draw that yields zero fuzz.
    pub fn midpoint() -> Self {
        Self(0.5)
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_draws_in_unit_interval() {
        let mut sources: Vec<Box<dyn RandomSource>> =
            vec![Box::new(ThreadRandom), Box::new(SeededRandom::new(7))];
        for source in sources.iter_mut() {
            for _ in 0..1000 {
                let draw = source.next_unit();
                assert!((0.0..1.0).contains(&draw));
            }
        }
    }

    #[test]
    fn test_fixed() {
        let mut source = FixedRandom::midpoint();
        assert_eq!(source.next_unit(), 0.5);
        assert_eq!(source.next_unit(), 0.5);
    }
}
