use std::fmt;

use serde::Serialize;

/// Scored pair of document indices, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityPair {
    pub first: usize,
    pub second: usize,
    pub score: f64,
}

impl SimilarityPair {
    pub const fn new(first: usize, second: usize, score: f64) -> Self {
        Self {
            first,
            second,
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPair {
    pub rank: usize,
    pub first: String,
    pub second: String,
    pub score: f64,
}

impl RankedPair {
    pub const fn new(rank: usize, first: String, second: String, score: f64) -> Self {
        Self {
            rank,
            first,
            second,
            score,
        }
    }
}

impl fmt::Display for RankedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pair {}: ({}, {}) - Similarity: {:.6}",
            self.rank, self.first, self.second, self.score
        )
    }
}
