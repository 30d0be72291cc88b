//! Categorized word bank.
//!
//! A word bank maps category names to parallel word/icon lists, where
//! `words[i]` is displayed with `icons[i]`. The bank is an immutable
//! configuration value injected into the sampler, which keeps tests free
//! to use small synthetic banks; [`WordBank::builtin`] provides the
//! process-wide default catalog.

mod builtin;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

/// A single sampled word with its display icon and source category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub icon: String,
    pub category: String,
}

/// One themed category: a name and index-aligned word/icon lists.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    words: Vec<String>,
    icons: Vec<String>,
}

impl Category {
    /// Create a category, validating the parallel-list invariant.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Validation` if the category is empty or the
    /// word and icon lists have different lengths.
    pub fn new(
        name: impl Into<String>,
        words: Vec<String>,
        icons: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        if words.is_empty() {
            return Err(VaultError::Validation(format!(
                "Category \"{}\" has no words",
                name
            )));
        }
        if words.len() != icons.len() {
            return Err(VaultError::Validation(format!(
                "Category \"{}\" has {} words but {} icons",
                name,
                words.len(),
                icons.len()
            )));
        }
        Ok(Self { name, words, icons })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of words in this category.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Materialize the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; callers draw indices via
    /// `SecureRandom::next_index(self.len())`.
    pub fn entry(&self, index: usize) -> WordEntry {
        WordEntry {
            word: self.words[index].clone(),
            icon: self.icons[index].clone(),
            category: self.name.clone(),
        }
    }
}

/// An immutable, validated collection of categories.
#[derive(Debug, Clone)]
pub struct WordBank {
    categories: Vec<Category>,
}

impl WordBank {
    /// Create a bank from pre-built categories.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Validation` if no categories are given.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(VaultError::Validation(
                "Word bank must contain at least one category".to_string(),
            ));
        }
        Ok(Self { categories })
    }

    /// The built-in catalog: six themed categories, 110 entries total.
    pub fn builtin() -> &'static WordBank {
        builtin::bank()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of words across all categories.
    pub fn total_words(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank_shape() {
        let bank = WordBank::builtin();
        assert_eq!(bank.categories().len(), 6);
        assert_eq!(bank.total_words(), 110);
        for category in bank.categories() {
            assert!(category.len() >= 15);
        }
    }

    #[test]
    fn test_builtin_entries_consistent() {
        let bank = WordBank::builtin();
        let animals = &bank.categories()[0];
        assert_eq!(animals.name(), "animals");
        let first = animals.entry(0);
        assert_eq!(first.word, "собака");
        assert_eq!(first.icon, "🐕");
        assert_eq!(first.category, "animals");
    }

    #[test]
    fn test_category_rejects_mismatched_lists() {
        let result = Category::new(
            "broken",
            vec!["a".to_string(), "b".to_string()],
            vec!["x".to_string()],
        );
        assert!(matches!(result, Err(VaultError::Validation(_))));
    }

    #[test]
    fn test_category_rejects_empty() {
        let result = Category::new("empty", Vec::new(), Vec::new());
        assert!(matches!(result, Err(VaultError::Validation(_))));
    }

    #[test]
    fn test_bank_rejects_no_categories() {
        let result = WordBank::new(Vec::new());
        assert!(matches!(result, Err(VaultError::Validation(_))));
    }
}
