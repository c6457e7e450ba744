//! Turns free-text ticket descriptions into a bag-of-words feature table with
//! a sentiment-derived `info` / `issue` label per row.

#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;

pub mod analyzer;
pub mod error;
pub mod features;
pub mod ngram;
pub mod sentiment;
pub mod tokenize;

pub use crate::analyzer::TextAnalyzer;
pub use crate::error::{Error, Result};
pub use crate::features::{run, Config, FeatureRow, FeatureTableBuilder, Label, Vocabulary};
pub use crate::ngram::{FreqDist, Ngram};
pub use crate::sentiment::PolarityScores;
