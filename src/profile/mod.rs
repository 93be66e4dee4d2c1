mod frequency;
mod top_k;

use std::collections::BTreeMap;

pub use self::{
    frequency::{count_words, normalize_frequencies, total_count},
    top_k::top_k,
};

pub type Count = u64;
pub type Frequency = f64;

/// Non-stop-word token counts, iterated in lexicographic token order.
pub type WordCounts = BTreeMap<String, Count>;
pub type Frequencies = BTreeMap<String, Frequency>;

#[derive(Debug, PartialEq, Clone)]
pub struct ProfileEntry {
    pub token: String,
    pub frequency: Frequency,
}

impl ProfileEntry {
    pub const fn new(token: String, frequency: Frequency) -> Self {
        Self { token, frequency }
    }
}

/// Highest-frequency entries of a document, descending by frequency with
/// ties in ascending token order.
pub type TopKProfile = Vec<ProfileEntry>;
