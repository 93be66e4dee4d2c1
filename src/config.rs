use std::collections::BTreeSet;

use crate::{
    constants::{DEFAULT_STOP_WORDS, DEFAULT_TOP_K, DEFAULT_TOP_M},
    error::{Error, Result},
    tokenizer::{normalize, tokenize},
};

/// Tokens excluded from counting. Each word goes through the same
/// normalization as document text, so `e-mail` excludes both `E` and `MAIL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords(BTreeSet<String>);

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();

        for word in words {
            set.extend(tokenize(&normalize(word.as_ref())).map(str::to_string));
        }

        Self(set)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    /// Highest-frequency tokens kept in each document profile.
    pub top_k: usize,
    /// Number of ranked pairs reported.
    pub top_m: usize,
    pub stop_words: StopWords,
    /// Profile documents and score pairs on the rayon pool.
    pub parallel: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            top_m: DEFAULT_TOP_M,
            stop_words: StopWords::default(),
            parallel: true,
        }
    }
}

impl ComparisonConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::InvalidConfig(
                "top_k must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
