//! Word tokenization plus the stopword and punctuation sets used to filter it.
//!
//! Tokens follow Unicode word boundaries (UAX #29). Whitespace is dropped,
//! words joined by `-` or `/` stay whole, every other non-word character
//! becomes its own token, and English contractions are split Treebank style
//! (`can't` -> `ca`, `n't`).

use std::collections::HashSet;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// ASCII punctuation characters, in code point order.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// English stopwords (NLTK list).
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

lazy_static! {
    static ref STOP_WORDS: HashSet<&'static str> = ENGLISH_STOP_WORDS.iter().cloned().collect();

    static ref CONTRACTION_REGEX: Regex =
        Regex::new("^(.+?)(n['’]t|['’](?:s|m|d|ll|re|ve))$").unwrap();
}

/// Splits `text` into lowercase tokens.
///
/// Words joined by `-` or `/` with no space around the joiner stay one token
/// (`re-run`, `and/or`).
pub fn word_tokenize(text: &str) -> Vec<String> {
    let segments: Vec<&str> = text.split_word_bounds().collect();
    let mut tokens = vec!();
    let mut i = 0;
    while i < segments.len() {
        let mut segment = segments[i].to_string();
        if is_word_segment(segments[i]) {
            while i + 2 < segments.len()
                && is_joiner(segments[i + 1])
                && is_word_segment(segments[i + 2])
            {
                segment.push_str(segments[i + 1]);
                segment.push_str(segments[i + 2]);
                i += 2;
            }
        }
        i += 1;

        if segment.chars().all(char::is_whitespace) {
            continue;
        }
        let segment = segment.to_lowercase();
        match CONTRACTION_REGEX.captures(&segment) {
            Some(caps) => {
                tokens.push(caps[1].to_string());
                tokens.push(caps[2].to_string());
            }
            None => tokens.push(segment),
        }
    }
    tokens
}

fn is_word_segment(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn is_joiner(segment: &str) -> bool {
    segment == "-" || segment == "/"
}

pub fn is_stopword(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// A token is punctuation when it occurs inside [`PUNCTUATION`], so single
/// symbols and runs such as `()` both qualify.
pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION.contains(token)
}
