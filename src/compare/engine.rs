use rayon::prelude::*;
use tracing::{debug, info};

use super::ranked_pair::{RankedPair, SimilarityPair};
use crate::{
    config::ComparisonConfig,
    corpus::Document,
    error::{Error, Result},
    profile::{count_words, normalize_frequencies, top_k, total_count, TopKProfile},
    similarity::score,
    tokenizer::normalize,
};

pub struct CorpusComparator {
    config: ComparisonConfig,
}

impl CorpusComparator {
    pub fn new(config: ComparisonConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Top-K profile of one document. A document without any non-stop-word
    /// token yields an empty profile.
    pub fn profile(&self, text: &str) -> TopKProfile {
        let counts = count_words(&normalize(text), &self.config.stop_words);

        normalize_frequencies(&counts, total_count(&counts)).map_or_else(
            || {
                debug!("Document has no countable tokens, using an empty profile");
                TopKProfile::new()
            },
            |freqs| top_k(&freqs, self.config.top_k),
        )
    }

    /// Profiles indexed by document position.
    pub fn profile_all(&self, documents: &[Document]) -> Vec<TopKProfile> {
        if self.config.parallel {
            documents
                .par_iter()
                .map(|document| self.profile(&document.text))
                .collect()
        } else {
            documents
                .iter()
                .map(|document| self.profile(&document.text))
                .collect()
        }
    }

    /// Scores every unordered pair and sorts descending by score, then
    /// ascending by `(first, second)`.
    pub fn rank(&self, profiles: &[TopKProfile]) -> Vec<SimilarityPair> {
        let n = profiles.len();
        let indices: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        let score_pair =
            |&(i, j): &(usize, usize)| SimilarityPair::new(i, j, score(&profiles[i], &profiles[j]));

        let mut pairs: Vec<SimilarityPair> = if self.config.parallel {
            indices.par_iter().map(score_pair).collect()
        } else {
            indices.iter().map(score_pair).collect()
        };

        pairs.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| (a.first, a.second).cmp(&(b.first, b.second)))
        });

        pairs
    }

    /// Ranks every document pair and returns the best `top_m` with their
    /// document names.
    pub fn compare(&self, documents: &[Document]) -> Result<Vec<RankedPair>> {
        if documents.len() < 2 {
            return Err(Error::InvalidConfig(format!(
                "at least 2 documents are required, got {}",
                documents.len()
            )));
        }

        let profiles = self.profile_all(documents);
        let empty = profiles.iter().filter(|profile| profile.is_empty()).count();
        info!(
            documents = documents.len(),
            empty_profiles = empty,
            top_k = self.config.top_k,
            "Profiled corpus"
        );

        let pairs = self.rank(&profiles);
        info!(pairs = pairs.len(), "Scored document pairs");

        Ok(pairs
            .into_iter()
            .take(self.config.top_m)
            .enumerate()
            .map(|(i, pair)| {
                RankedPair::new(
                    i + 1,
                    documents[pair.first].name.clone(),
                    documents[pair.second].name.clone(),
                    pair.score,
                )
            })
            .collect())
    }
}
