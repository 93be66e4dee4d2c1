mod engine;
mod ranked_pair;

pub use self::{
    engine::CorpusComparator,
    ranked_pair::{RankedPair, SimilarityPair},
};
