//! Memory-test planning and grading.
//!
//! A test hides a few positions of a saved phrase and checks the user's
//! recollection of the hidden words. Planning uses the same secure random
//! source as sampling; grading is a pure comparison.

use crate::error::{Result, VaultError};
use crate::random::SecureRandom;
use crate::sampler::Phrase;

/// Upper bound on hidden words per test.
pub const MAX_HIDDEN_WORDS: usize = 3;

/// A planned memory test: which positions of the phrase are hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTest {
    hidden: Vec<usize>,
}

/// Outcome of grading a memory test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestScore {
    pub correct: usize,
    pub total: usize,
}

impl TestScore {
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

/// Plan a test over `phrase`: hide `min(3, max(1, len/2))` distinct
/// positions, drawn from `rng`, sorted ascending.
///
/// # Errors
///
/// Returns `VaultError::InvalidInput` for an empty phrase and
/// `VaultError::RandomSource` if the random source fails.
pub fn plan(phrase: &Phrase, rng: &mut dyn SecureRandom) -> Result<MemoryTest> {
    if phrase.is_empty() {
        return Err(VaultError::InvalidInput(
            "Cannot plan a test over an empty phrase".to_string(),
        ));
    }

    let target = MAX_HIDDEN_WORDS.min((phrase.len() / 2).max(1));
    let mut hidden: Vec<usize> = Vec::with_capacity(target);
    while hidden.len() < target {
        let index = rng.next_index(phrase.len())?;
        if !hidden.contains(&index) {
            hidden.push(index);
        }
    }
    hidden.sort_unstable();

    Ok(MemoryTest { hidden })
}

impl MemoryTest {
    /// Hidden word positions, ascending.
    pub fn hidden_positions(&self) -> &[usize] {
        &self.hidden
    }

    /// Grade `answers` against the hidden words of `phrase`.
    ///
    /// Answers are matched positionally to the hidden positions, compared
    /// case-insensitively after trimming. Missing answers count as wrong.
    pub fn grade(&self, phrase: &Phrase, answers: &[String]) -> TestScore {
        let words = phrase.words();
        let mut correct = 0;
        for (slot, position) in self.hidden.iter().enumerate() {
            let expected = words[*position].word.trim().to_lowercase();
            let given = answers
                .get(slot)
                .map(|answer| answer.trim().to_lowercase())
                .unwrap_or_default();
            if !given.is_empty() && given == expected {
                correct += 1;
            }
        }
        TestScore {
            correct,
            total: self.hidden.len(),
        }
    }
}
