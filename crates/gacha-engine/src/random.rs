//! Uniform random sources for draw resolution.
//!
//! The resolver never reaches for a global generator; callers inject a
//! [`RandomSource`] so draws can be replayed exactly in tests.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Return the next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Largest sample strictly below 1.0; what an exhausted script yields.
const LAST_SAMPLE: f64 = 1.0 - f64::EPSILON;

/// Replays a fixed sequence of samples.
///
/// Once the script is exhausted every further sample is the largest value
/// below 1.0, which only hard pity can turn into an SSR.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    samples: VecDeque<f64>,
    consumed: usize,
}

impl ScriptedSource {
    /// Create a source that yields `samples` in order.
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Samples not yet consumed.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }

    /// Samples handed out so far, including fallback samples.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.consumed += 1;
        self.samples.pop_front().unwrap_or(LAST_SAMPLE)
    }
}

/// Adapts any `FnMut() -> f64` closure into a [`RandomSource`].
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> RandomSource for FnSource<F> {
    fn next_unit(&mut self) -> f64 {
        (self.0)()
    }
}
