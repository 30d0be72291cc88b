//! Word sampling: turning CSPRNG output into mnemonic phrases.
//!
//! Each slot of a phrase is filled by drawing a uniformly random category
//! and then a uniformly random word inside it. Duplicate words are avoided
//! on a best-effort basis: after [`SLOT_ATTEMPT_LIMIT`] failed attempts for
//! a single slot the next pick is accepted regardless, so generation always
//! terminates even on pathological banks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};
use crate::random::{OsRandom, SecureRandom};
use crate::wordbank::{WordBank, WordEntry};

/// Attempt cap for the per-slot duplicate-avoidance loop.
///
/// Once a slot has burned through this many picks, the following pick is
/// accepted even if it repeats an earlier word. With the built-in bank
/// (every category ≥15 words) and phrase lengths ≤10 the fallback is
/// effectively unreachable.
pub const SLOT_ATTEMPT_LIMIT: u32 = 50;

/// An ordered mnemonic phrase.
///
/// Order is significant: display and the passphrase string both depend on
/// it. Serializes as a plain array of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phrase(Vec<WordEntry>);

impl Phrase {
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The canonical passphrase form: words joined by single spaces, in
    /// sequence order. Never stored separately; always re-derived.
    pub fn to_passphrase(&self) -> String {
        self.0
            .iter()
            .map(|entry| entry.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Space-joined string form of a phrase.
///
/// Convenience alias for [`Phrase::to_passphrase`].
pub fn phrase_to_string(phrase: &Phrase) -> String {
    phrase.to_passphrase()
}

/// Samples phrases from a word bank.
pub struct PhraseSampler<'a> {
    bank: &'a WordBank,
}

impl<'a> PhraseSampler<'a> {
    pub fn new(bank: &'a WordBank) -> Self {
        Self { bank }
    }

    /// Generate a phrase of exactly `length` entries.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::InvalidInput` if `length` is zero, and
    /// `VaultError::RandomSource` if the random source fails.
    pub fn generate(&self, length: usize, rng: &mut dyn SecureRandom) -> Result<Phrase> {
        if length == 0 {
            return Err(VaultError::InvalidInput(
                "Phrase length must be positive".to_string(),
            ));
        }

        let categories = self.bank.categories();
        let mut used: HashSet<String> = HashSet::new();
        let mut words = Vec::with_capacity(length);

        for _ in 0..length {
            let mut attempts = 0u32;
            let entry = loop {
                let category = &categories[rng.next_index(categories.len())?];
                let entry = category.entry(rng.next_index(category.len())?);
                attempts += 1;
                if !used.contains(&entry.word) || attempts > SLOT_ATTEMPT_LIMIT {
                    break entry;
                }
            };
            used.insert(entry.word.clone());
            words.push(entry);
        }

        Ok(Phrase(words))
    }
}

/// Generate a phrase from the built-in bank using the OS random source.
pub fn generate_phrase(length: usize) -> Result<Phrase> {
    PhraseSampler::new(WordBank::builtin()).generate(length, &mut OsRandom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::Category;

    /// Random source fed from a fixed list of 32-bit values, four bytes
    /// per draw. Errors once the script runs out.
    struct ScriptedRandom {
        values: Vec<u32>,
        next: usize,
    }

    impl ScriptedRandom {
        fn new(values: Vec<u32>) -> Self {
            Self { values, next: 0 }
        }
    }

    impl SecureRandom for ScriptedRandom {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
            for chunk in dest.chunks_mut(4) {
                let value = *self
                    .values
                    .get(self.next)
                    .ok_or_else(|| VaultError::RandomSource("script exhausted".to_string()))?;
                self.next += 1;
                let bytes = value.to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
            Ok(())
        }
    }

    /// Random source that always yields the same value and counts draws.
    struct ConstantRandom {
        value: u32,
        draws: u32,
    }

    impl SecureRandom for ConstantRandom {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
            for chunk in dest.chunks_mut(4) {
                self.draws += 1;
                let bytes = self.value.to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
            Ok(())
        }
    }

    fn animals_bank() -> WordBank {
        let category = Category::new(
            "animals",
            vec![
                "собака".to_string(),
                "кот".to_string(),
                "лев".to_string(),
                "орел".to_string(),
            ],
            vec![
                "🐕".to_string(),
                "🐱".to_string(),
                "🦁".to_string(),
                "🦅".to_string(),
            ],
        )
        .unwrap();
        WordBank::new(vec![category]).unwrap()
    }

    #[test]
    fn test_generate_exact_length() {
        for n in [1, 4, 6, 10] {
            let phrase = generate_phrase(n).unwrap();
            assert_eq!(phrase.len(), n);
        }
    }

    #[test]
    fn test_generate_full_bank_length() {
        let bank = WordBank::builtin();
        let phrase = generate_phrase(bank.total_words()).unwrap();
        assert_eq!(phrase.len(), bank.total_words());
    }

    #[test]
    fn test_zero_length_rejected() {
        let result = generate_phrase(0);
        assert!(matches!(result, Err(VaultError::InvalidInput(_))));
    }

    #[test]
    fn test_passphrase_token_count() {
        for n in [1, 4, 6, 10] {
            let phrase = generate_phrase(n).unwrap();
            let passphrase = phrase.to_passphrase();
            let tokens: Vec<&str> = passphrase.split(' ').collect();
            assert_eq!(tokens.len(), n);
        }
    }

    #[test]
    fn test_typical_lengths_have_no_duplicates() {
        let phrase = generate_phrase(10).unwrap();
        let mut seen = HashSet::new();
        for entry in phrase.words() {
            assert!(seen.insert(entry.word.clone()), "duplicate: {}", entry.word);
        }
    }

    #[test]
    fn test_entries_consistent_with_bank() {
        let phrase = generate_phrase(8).unwrap();
        let bank = WordBank::builtin();
        for entry in phrase.words() {
            let category = bank
                .categories()
                .iter()
                .find(|c| c.name() == entry.category)
                .expect("sampled category exists");
            let matching = (0..category.len())
                .map(|i| category.entry(i))
                .find(|e| e.word == entry.word)
                .expect("sampled word exists in its category");
            assert_eq!(matching.icon, entry.icon);
        }
    }

    #[test]
    fn test_scripted_source_is_deterministic() {
        let bank = animals_bank();
        let sampler = PhraseSampler::new(&bank);
        // Per slot: category draw, then word draw.
        let script = vec![0, 0, 0, 1, 0, 2, 0, 3];

        let first = sampler
            .generate(4, &mut ScriptedRandom::new(script.clone()))
            .unwrap();
        let second = sampler
            .generate(4, &mut ScriptedRandom::new(script))
            .unwrap();

        assert_eq!(first, second);
        let words: Vec<&str> = first.words().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["собака", "кот", "лев", "орел"]);
    }

    #[test]
    fn test_duplicate_picks_are_retried() {
        let bank = animals_bank();
        let sampler = PhraseSampler::new(&bank);
        // Slot 2 first picks "собака" again, which must be rejected and
        // retried before "кот" is accepted.
        let script = vec![0, 0, 0, 0, 0, 1];

        let phrase = sampler
            .generate(2, &mut ScriptedRandom::new(script))
            .unwrap();
        let words: Vec<&str> = phrase.words().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["собака", "кот"]);
    }

    #[test]
    fn test_fallback_admits_duplicate_after_attempt_cap() {
        let bank = animals_bank();
        let sampler = PhraseSampler::new(&bank);
        let mut rng = ConstantRandom { value: 0, draws: 0 };

        let phrase = sampler.generate(2, &mut rng).unwrap();

        let words: Vec<&str> = phrase.words().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["собака", "собака"]);
        // Slot 1 accepts on the first pick (2 draws). Slot 2 rejects 50
        // picks and accepts the 51st, 2 draws each.
        assert_eq!(rng.draws, 2 + (SLOT_ATTEMPT_LIMIT + 1) * 2);
    }

    #[test]
    fn test_random_source_failure_propagates() {
        let bank = animals_bank();
        let sampler = PhraseSampler::new(&bank);
        let result = sampler.generate(1, &mut ScriptedRandom::new(Vec::new()));
        assert!(matches!(result, Err(VaultError::RandomSource(_))));
    }
}
