//! N-gram windows and frequency distributions over token sequences.

use std::collections::HashMap;
use std::iter::FromIterator;

/// An n-gram is the ordered run of tokens it spans; a unigram holds one token.
pub type Ngram = Vec<String>;

/// Sliding window of width `n` and stride 1 over `tokens`.
///
/// Yields `max(0, len - n + 1)` windows. A width of zero yields nothing.
pub fn ngrams<'a>(tokens: &'a [String], n: usize) -> impl Iterator<Item = Ngram> + 'a {
    let windows = if n == 0 || n > tokens.len() { 0 } else { tokens.len() - n + 1 };
    (0..windows).map(move |i| tokens[i..i + n].to_vec())
}

/// Occurrence counts per n-gram.
///
/// Iteration follows the order in which each distinct n-gram was first
/// counted, which is what fixes the column order of the feature table.
/// Entries never hold a zero count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FreqDist {
    counts: HashMap<Ngram, usize>,
    order: Vec<Ngram>,
}

impl FreqDist {
    pub fn new() -> FreqDist {
        FreqDist::default()
    }

    /// Adds one occurrence of `ngram`, creating it at 1 when absent.
    pub fn increment(&mut self, ngram: Ngram) {
        if let Some(count) = self.counts.get_mut(&ngram) {
            *count += 1;
        } else {
            self.order.push(ngram.clone());
            self.counts.insert(ngram, 1);
        }
    }

    /// Count for `ngram`, zero when it was never seen.
    pub fn get(&self, ngram: &[String]) -> usize {
        self.counts.get(ngram).cloned().unwrap_or(0)
    }

    /// Count for the unigram `word`. Unigrams are stored as one-element
    /// keys, so this looks up `[word]`.
    pub fn word_count(&self, word: &str) -> usize {
        self.get(&[word.to_string()])
    }

    pub fn contains(&self, ngram: &[String]) -> bool {
        self.counts.contains_key(ngram)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Ngram, usize)> {
        self.order.iter().map(move |ngram| (ngram, self.counts[ngram]))
    }

    /// The `k` most frequent entries, count descending, ties in first-seen order.
    pub fn most_common(&self, k: usize) -> Vec<(&Ngram, usize)> {
        let mut entries: Vec<(&Ngram, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(k);
        entries
    }

    fn insert_count(&mut self, ngram: Ngram, count: usize) {
        if count == 0 {
            return;
        }
        if !self.counts.contains_key(&ngram) {
            self.order.push(ngram.clone());
        }
        self.counts.insert(ngram, count);
    }
}

impl FromIterator<Ngram> for FreqDist {
    fn from_iter<I: IntoIterator<Item = Ngram>>(iter: I) -> FreqDist {
        let mut dist = FreqDist::new();
        for ngram in iter {
            dist.increment(ngram);
        }
        dist
    }
}

/// Folds `new_ngrams` into `dist` in place and hands the same distribution back,
/// so counts can be accumulated across texts read one at a time.
pub fn update_freq_dist<I>(dist: &mut FreqDist, new_ngrams: I) -> &mut FreqDist
where
    I: IntoIterator<Item = Ngram>,
{
    for ngram in new_ngrams {
        dist.increment(ngram);
    }
    dist
}

/// Keeps only the n-grams that have `keyword` as one of their tokens.
pub fn filter_freq_dist(dist: &FreqDist, keyword: &str) -> FreqDist {
    let mut filtered = FreqDist::new();
    for (ngram, count) in dist.iter() {
        if ngram.iter().any(|token| token == keyword) {
            filtered.insert_count(ngram.clone(), count);
        }
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn window_count() {
        let toks = tokens(&["a", "b", "c", "d"]);
        assert_eq!(ngrams(&toks, 1).count(), 4);
        assert_eq!(ngrams(&toks, 3).collect::<Vec<_>>(), vec![tokens(&["a", "b", "c"]), tokens(&["b", "c", "d"])]);
        assert_eq!(ngrams(&toks, 5).count(), 0);
        assert_eq!(ngrams(&toks, 0).count(), 0);
        assert_eq!(ngrams(&[], 1).count(), 0);
    }

    #[test]
    fn counts_sum_to_window_count() {
        let toks = tokens(&["disk", "full", "disk", "full", "again"]);
        for n in 1..=5 {
            let dist: FreqDist = ngrams(&toks, n).collect();
            assert_eq!(dist.total(), toks.len() - n + 1);
        }
    }

    #[test]
    fn iterates_in_first_seen_order() {
        let dist: FreqDist = ngrams(&tokens(&["b", "a", "b", "c", "a"]), 1).collect();
        let order: Vec<(String, usize)> = dist.iter().map(|(ng, c)| (ng[0].clone(), c)).collect();
        assert_eq!(order, vec![("b".to_string(), 2), ("a".to_string(), 2), ("c".to_string(), 1)]);
        assert_eq!(dist.word_count("b"), 2);
        assert_eq!(dist.word_count("zzz"), 0);
    }

    #[test]
    fn most_common_breaks_ties_by_first_seen() {
        let dist: FreqDist = ngrams(&tokens(&["x", "y", "y", "z", "x", "w"]), 1).collect();
        let top: Vec<&str> = dist.most_common(3).iter().map(|(ng, _)| ng[0].as_str()).collect();
        assert_eq!(top, vec!["x", "y", "z"]);
    }

    #[test]
    fn update_accumulates_in_place() {
        let mut dist: FreqDist = ngrams(&tokens(&["a", "b"]), 1).collect();
        let more = tokens(&["b", "c"]);
        let updated = update_freq_dist(&mut dist, ngrams(&more, 1));
        assert_eq!(updated.word_count("b"), 2);
        assert_eq!(updated.word_count("c"), 1);
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn filter_matches_whole_tokens_only() {
        let toks = tokens(&["disk", "full", "diskette", "disk"]);
        let dist: FreqDist = ngrams(&toks, 2).collect();
        let filtered = filter_freq_dist(&dist, "disk");
        let kept: Vec<&Ngram> = filtered.iter().map(|(ng, _)| ng).collect();
        assert_eq!(kept, vec![&tokens(&["disk", "full"]), &tokens(&["diskette", "disk"])]);
        assert!(!filtered.contains(&tokens(&["full", "diskette"])));
        assert!(filter_freq_dist(&dist, "dis").is_empty());
    }
}
