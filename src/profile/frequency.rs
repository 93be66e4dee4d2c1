use crate::{config::StopWords, tokenizer::tokenize};

use super::{Count, Frequencies, Frequency, WordCounts};

pub fn count_words(normalized: &str, stop_words: &StopWords) -> WordCounts {
    let mut counts = WordCounts::new();

    for token in tokenize(normalized).filter(|token| !stop_words.contains(token)) {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }

    counts
}

pub fn total_count(counts: &WordCounts) -> Count {
    counts.values().sum()
}

/// Divides every count by `total`. Returns `None` for an empty profile
/// (`total == 0`).
#[allow(clippy::cast_precision_loss)]
pub fn normalize_frequencies(counts: &WordCounts, total: Count) -> Option<Frequencies> {
    if total == 0 {
        return None;
    }

    Some(
        counts
            .iter()
            .map(|(token, count)| (token.clone(), *count as Frequency / total as Frequency))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::normalize;

    #[test]
    fn counts_skip_stop_words() {
        let counts = count_words(&normalize("The cat and the hat of a cat"), &StopWords::default());

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["CAT"], 2);
        assert_eq!(counts["HAT"], 1);
        assert_eq!(total_count(&counts), 3);
    }

    #[test]
    fn counts_iterate_lexicographically() {
        let counts = count_words(&normalize("zebra apple mango apple"), &StopWords::default());
        let tokens: Vec<_> = counts.keys().map(String::as_str).collect();

        assert_eq!(tokens, vec!["APPLE", "MANGO", "ZEBRA"]);
    }

    #[test]
    fn custom_stop_words() {
        let stop_words = StopWords::new(["cat"]);
        let counts = count_words(&normalize("the cat sat"), &stop_words);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["THE"], 1);
        assert_eq!(counts["SAT"], 1);
    }

    #[test]
    fn frequencies_sum_to_one() {
        let text = "It was the best of times, it was the worst of times, \
                    it was the age of wisdom, it was the age of foolishness";
        let counts = count_words(&normalize(text), &StopWords::default());
        let freqs = normalize_frequencies(&counts, total_count(&counts)).expect("non-empty profile");

        let sum: f64 = freqs.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((freqs["WAS"] - 4.0 / 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_profile_when_only_stop_words() {
        let counts = count_words(&normalize("The and a of, in an THE."), &StopWords::default());

        assert!(counts.is_empty());
        assert_eq!(total_count(&counts), 0);
        assert_eq!(normalize_frequencies(&counts, 0), None);
    }
}
