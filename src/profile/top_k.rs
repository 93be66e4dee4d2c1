use super::{Frequencies, ProfileEntry, TopKProfile};

pub fn top_k(freqs: &Frequencies, k: usize) -> TopKProfile {
    let mut entries: Vec<_> = freqs
        .iter()
        .map(|(token, frequency)| ProfileEntry::new(token.clone(), *frequency))
        .collect();

    entries.sort_by(|a, b| {
        b.frequency
            .total_cmp(&a.frequency)
            .then_with(|| a.token.cmp(&b.token))
    });
    entries.truncate(k);

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freqs(entries: &[(&str, f64)]) -> Frequencies {
        entries
            .iter()
            .map(|(token, frequency)| ((*token).to_string(), *frequency))
            .collect()
    }

    fn tokens(profile: &TopKProfile) -> Vec<&str> {
        profile.iter().map(|entry| entry.token.as_str()).collect()
    }

    #[test]
    fn sorted_descending() {
        let profile = top_k(&freqs(&[("A", 0.1), ("B", 0.5), ("C", 0.4)]), 10);

        assert_eq!(tokens(&profile), vec!["B", "C", "A"]);
        assert_eq!(profile[0], ProfileEntry::new("B".to_string(), 0.5));
    }

    #[test]
    fn ties_break_on_ascending_token() {
        let profile = top_k(
            &freqs(&[("ZETA", 0.25), ("ALPHA", 0.25), ("MU", 0.25), ("OMEGA", 0.25)]),
            3,
        );

        assert_eq!(tokens(&profile), vec!["ALPHA", "MU", "OMEGA"]);
    }

    #[test]
    fn truncates_to_k() {
        let profile = top_k(&freqs(&[("A", 0.4), ("B", 0.3), ("C", 0.2), ("D", 0.1)]), 2);

        assert_eq!(tokens(&profile), vec!["A", "B"]);
    }

    #[test]
    fn shorter_than_k() {
        let profile = top_k(&freqs(&[("A", 0.6), ("B", 0.4)]), 100);

        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn empty_frequencies() {
        assert!(top_k(&Frequencies::new(), 100).is_empty());
    }
}
