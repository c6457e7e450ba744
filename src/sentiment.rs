//! Lexicon-based polarity scoring (VADER) tuned for ticket text.

use std::collections::HashMap;

use unicase::UniCase;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Valences layered over the stock lexicon. Both words mark a failing ticket.
pub const CUSTOM_VALENCES: &[(&str, f64)] = &[("abended", -3.1), ("issue", -3.1)];

lazy_static! {
    static ref TICKET_LEXICON: HashMap<UniCase<&'static str>, f64> = {
        let mut lexicon = vader_sentiment::LEXICON.clone();
        for (word, valence) in CUSTOM_VALENCES {
            lexicon.insert(UniCase::new(*word), *valence);
        }
        lexicon
    };
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Normalized aggregate in `[-1, 1]`.
    pub compound: f64,
}

impl PolarityScores {
    /// Looks a score up by its VADER key.
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "neg" => Some(self.neg),
            "neu" => Some(self.neu),
            "pos" => Some(self.pos),
            "compound" => Some(self.compound),
            _ => None,
        }
    }
}

/// Scores `text` against the stock lexicon plus [`CUSTOM_VALENCES`].
pub fn polarity_scores(text: &str) -> PolarityScores {
    let analyzer = SentimentIntensityAnalyzer::from_lexicon(&TICKET_LEXICON);
    let scores = analyzer.polarity_scores(text);
    let score = |key: &str| scores.get(key).cloned().unwrap_or(0.0);
    PolarityScores {
        neg: score("neg"),
        neu: score("neu"),
        pos: score("pos"),
        compound: score("compound"),
    }
}
