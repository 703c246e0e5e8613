//! Distractor sampling for the numeric answer modes.
//!
//! Offsets are drawn from a half-open window around the answer. Zero offsets,
//! duplicates and values rejected by the caller's predicate are redrawn; a run
//! of failed draws doubles the window, and once the widenings are used up a
//! deterministic outward scan fills whatever is left.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::GenerateError;
use crate::model::CANDIDATE_COUNT;

/// Consecutive rejected draws tolerated before the window doubles.
pub const MAX_ATTEMPTS_PER_WINDOW: u32 = 32;

/// How many times the window may double before falling back to the scan.
pub const MAX_WIDENINGS: u32 = 4;

/// Largest distance from the answer the fallback scan will try.
pub const SCAN_LIMIT: i64 = 1_000;

/// Half-open offset range `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetWindow {
    low: i64,
    high: i64,
}

impl OffsetWindow {
    #[must_use]
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Symmetric window `[-radius, radius)`.
    #[must_use]
    pub fn around(radius: i64) -> Self {
        Self::new(-radius, radius)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.low >= self.high
    }

    fn widened(self) -> Self {
        Self::new(self.low.saturating_mul(2), self.high.saturating_mul(2))
    }

    fn sample<R: Rng>(self, rng: &mut R) -> i64 {
        rng.random_range(self.low..self.high)
    }
}

/// Draws `CANDIDATE_COUNT - 1` distinct distractors for `answer`.
///
/// Every returned value differs from `answer` and satisfies `valid`.
///
/// # Errors
///
/// Returns `GenerateError::InsufficientCandidates` when even the outward scan
/// cannot find enough valid values.
pub fn distractors<R, F>(
    rng: &mut R,
    answer: i64,
    window: OffsetWindow,
    valid: F,
) -> Result<Vec<i64>, GenerateError>
where
    R: Rng,
    F: Fn(i64) -> bool,
{
    let needed = CANDIDATE_COUNT - 1;
    let mut picked: Vec<i64> = Vec::with_capacity(needed);
    let accept =
        |picked: &[i64], value: i64| value != answer && valid(value) && !picked.contains(&value);

    let mut window = window;
    let mut widenings = 0;
    while picked.len() < needed && !window.is_empty() {
        let mut misses = 0;
        while picked.len() < needed && misses < MAX_ATTEMPTS_PER_WINDOW {
            let Some(value) = answer.checked_add(window.sample(rng)) else {
                misses += 1;
                continue;
            };
            if accept(&picked, value) {
                picked.push(value);
                misses = 0;
            } else {
                misses += 1;
            }
        }
        if widenings == MAX_WIDENINGS {
            break;
        }
        window = window.widened();
        widenings += 1;
    }

    let mut distance = 1;
    while picked.len() < needed && distance <= SCAN_LIMIT {
        for value in [answer.checked_add(distance), answer.checked_sub(distance)]
            .into_iter()
            .flatten()
        {
            if picked.len() < needed && accept(&picked, value) {
                picked.push(value);
            }
        }
        distance += 1;
    }

    if picked.len() < needed {
        return Err(GenerateError::InsufficientCandidates { answer, needed });
    }
    Ok(picked)
}

/// The answer plus its distractors, shuffled into display order.
///
/// # Errors
///
/// Propagates `GenerateError::InsufficientCandidates` from [`distractors`].
pub fn candidate_set<R, F>(
    rng: &mut R,
    answer: i64,
    window: OffsetWindow,
    valid: F,
) -> Result<Vec<i64>, GenerateError>
where
    R: Rng,
    F: Fn(i64) -> bool,
{
    let mut values = distractors(rng, answer, window, valid)?;
    values.push(answer);
    values.shuffle(rng);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn distractors_are_distinct_and_exclude_answer() {
        let mut rng = StdRng::seed_from_u64(7);
        for answer in [-20, 0, 1, 12, 500] {
            let values = distractors(&mut rng, answer, OffsetWindow::around(10), |_| true).unwrap();
            assert_eq!(values.len(), 3);
            assert!(!values.contains(&answer));
            let mut sorted = values.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 3);
            assert!(values.iter().all(|v| (answer - 10..answer + 10).contains(v)));
        }
    }

    #[test]
    fn predicate_is_respected() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let values = distractors(&mut rng, 2, OffsetWindow::around(5), |v| v > 0).unwrap();
            assert!(values.iter().all(|v| *v > 0 && *v != 2));
        }
    }

    #[test]
    fn narrow_window_widens_until_it_fits() {
        // [-1, 1) only ever yields the offsets -1 and 0.
        let mut rng = StdRng::seed_from_u64(3);
        let values = distractors(&mut rng, 50, OffsetWindow::around(1), |_| true).unwrap();
        assert_eq!(values.len(), 3);
        assert!(!values.contains(&50));
    }

    #[test]
    fn empty_window_falls_back_to_scan() {
        let mut rng = StdRng::seed_from_u64(0);
        let values = distractors(&mut rng, 10, OffsetWindow::new(0, 0), |_| true).unwrap();
        assert_eq!(values, vec![11, 9, 12]);
    }

    #[test]
    fn scan_skips_invalid_values() {
        let mut rng = StdRng::seed_from_u64(0);
        let values = distractors(&mut rng, 1, OffsetWindow::new(0, 0), |v| v > 0).unwrap();
        assert_eq!(values, vec![2, 3, 4]);
    }

    #[test]
    fn impossible_predicate_reports_insufficient_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = distractors(&mut rng, 10, OffsetWindow::around(10), |_| false).unwrap_err();
        assert_eq!(
            err,
            GenerateError::InsufficientCandidates {
                answer: 10,
                needed: 3
            }
        );
    }

    #[test]
    fn candidate_set_contains_answer_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = candidate_set(&mut rng, 12, OffsetWindow::around(10), |_| true).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values.iter().filter(|v| **v == 12).count(), 1);
    }
}
