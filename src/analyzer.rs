//! Token views and n-gram statistics for a single text.

use crate::ngram::{self, FreqDist, Ngram};
use crate::sentiment::{self, PolarityScores};
use crate::tokenize;

/// Tokenizes a text once and serves filtered views and counts over it.
///
/// The raw tokens never change. The filtered view starts with stopwords and
/// punctuation removed and is rebuilt from the raw tokens by every
/// [`set_filter`](TextAnalyzer::set_filter) call.
#[derive(Clone, Debug)]
pub struct TextAnalyzer {
    text: String,
    raw_tokens: Vec<String>,
    tokens: Vec<String>,
}

impl TextAnalyzer {
    pub fn new(text: &str) -> TextAnalyzer {
        let raw_tokens = tokenize::word_tokenize(text);
        let mut analyzer = TextAnalyzer {
            text: text.to_string(),
            tokens: raw_tokens.clone(),
            raw_tokens,
        };
        analyzer.set_filter(true, true);
        analyzer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn raw_tokens(&self) -> &[String] {
        &self.raw_tokens
    }

    /// Tokens left after the current filter.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Recomputes the filtered view from the raw tokens with exactly these flags.
    pub fn set_filter(&mut self, remove_stopwords: bool, remove_punctuation: bool) {
        self.tokens = self
            .raw_tokens
            .iter()
            .filter(|token| !(remove_stopwords && tokenize::is_stopword(token)))
            .filter(|token| !(remove_punctuation && tokenize::is_punctuation(token)))
            .cloned()
            .collect();
    }

    pub fn ngrams(&self, n: usize) -> impl Iterator<Item = Ngram> + '_ {
        ngram::ngrams(&self.tokens, n)
    }

    pub fn freq_dist(&self, n: usize) -> FreqDist {
        self.ngrams(n).collect()
    }

    /// See [`ngram::update_freq_dist`].
    pub fn update_freq_dist<I>(dist: &mut FreqDist, new_ngrams: I) -> &mut FreqDist
    where
        I: IntoIterator<Item = Ngram>,
    {
        ngram::update_freq_dist(dist, new_ngrams)
    }

    /// See [`ngram::filter_freq_dist`].
    pub fn filter_freq_dist(dist: &FreqDist, keyword: &str) -> FreqDist {
        ngram::filter_freq_dist(dist, keyword)
    }

    /// Scores `text` on its own; independent of any analyzer's filter state.
    pub fn polarity(text: &str) -> PolarityScores {
        sentiment::polarity_scores(text)
    }
}
