use std::collections::HashMap;

use crate::profile::{Frequency, TopKProfile};

/// Sum of `freq_a + freq_b` over every token present in both profiles.
///
/// Contributions are added in ascending token order, so the result does not
/// depend on argument order: `score(a, b)` and `score(b, a)` are bit-identical.
pub fn score(a: &TopKProfile, b: &TopKProfile) -> f64 {
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let lookup: HashMap<&str, Frequency> = larger
        .iter()
        .map(|entry| (entry.token.as_str(), entry.frequency))
        .collect();

    let mut shared: Vec<(&str, Frequency)> = smaller
        .iter()
        .filter_map(|entry| {
            lookup
                .get(entry.token.as_str())
                .map(|frequency| (entry.token.as_str(), entry.frequency + frequency))
        })
        .collect();

    shared.sort_unstable_by(|x, y| x.0.cmp(y.0));

    shared
        .iter()
        .fold(0.0, |total, (_, contribution)| total + contribution)
}
