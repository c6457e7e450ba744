//! Bag-of-words feature table: one row per ticket description, a sentiment
//! label, and unigram counts over a vocabulary shared by the whole corpus.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use crate::analyzer::TextAnalyzer;
use crate::error::{Error, Result};
use crate::ngram::FreqDist;

pub const DEFAULT_INPUT: &str = "data/ticket_Data.csv";
pub const DEFAULT_OUTPUT: &str = "data/ticket_Data_freq.csv";

const DESCRIPTION_HEADER: &str = "Description";
const LABEL_HEADER: &str = "Label";

/// Joins descriptions into the corpus text. Only unigrams are counted over
/// the corpus, so no n-gram ever spans two descriptions through it.
const CORPUS_SEPARATOR: &str = "\n";

/// A word enters the vocabulary when its corpus count is above this.
const MIN_VOCAB_COUNT: usize = 1;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Info,
    Issue,
}

impl Label {
    /// `Info` for a non-negative compound polarity, `Issue` otherwise.
    pub fn from_compound(compound: f64) -> Label {
        if compound >= 0.0 {
            Label::Info
        } else {
            Label::Issue
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Info => "info",
            Label::Issue => "issue",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered feature columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Unigrams of `dist` counted more than `min_count` times, in the
    /// distribution's first-seen order.
    pub fn from_freq_dist(dist: &FreqDist, min_count: usize) -> Vocabulary {
        let words = dist
            .iter()
            .filter(|(ngram, count)| ngram.len() == 1 && *count > min_count)
            .map(|(ngram, _count)| ngram[0].clone())
            .collect();
        Vocabulary { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Count of each vocabulary word in `dist`, zero when absent.
    pub fn vectorize(&self, dist: &FreqDist) -> Vec<usize> {
        self.words.iter().map(|word| dist.word_count(word)).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRow {
    pub description: String,
    pub label: Label,
    /// Aligned with [`Vocabulary::words`].
    pub counts: Vec<usize>,
}

impl FeatureRow {
    fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(self.counts.len() + 2);
        record.push(self.description.clone());
        record.push(self.label.to_string());
        record.extend(self.counts.iter().map(|count| count.to_string()));
        record
    }
}

/// Reads `(identifier, description)` rows and returns the trimmed, non-empty
/// descriptions in input order. Any row without exactly two fields aborts.
pub fn read_descriptions<R: io::Read>(reader: R, has_header: bool) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader);

    let mut descriptions = vec!();
    let mut skipped = 0;
    for result in reader.records() {
        let record = result?;
        if record.len() != 2 {
            return Err(Error::MalformedRecord {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                fields: record.len(),
            });
        }
        let description = record[1].trim();
        if description.is_empty() {
            skipped += 1;
        } else {
            descriptions.push(description.to_string());
        }
    }
    debug!("Read {} descriptions, skipped {} empty.", descriptions.len(), skipped);
    Ok(descriptions)
}

/// Builds the shared vocabulary once and derives a feature row per description.
#[derive(Clone, Debug)]
pub struct FeatureTableBuilder {
    descriptions: Vec<String>,
    vocabulary: Vocabulary,
}

impl FeatureTableBuilder {
    /// Trims every description and drops the empty ones before the
    /// vocabulary is built.
    pub fn from_descriptions<I, S>(descriptions: I) -> FeatureTableBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let descriptions: Vec<String> = descriptions
            .into_iter()
            .map(|d| d.as_ref().trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();

        let corpus = TextAnalyzer::new(&descriptions.join(CORPUS_SEPARATOR));
        let corpus_dist = corpus.freq_dist(1);
        let vocabulary = Vocabulary::from_freq_dist(&corpus_dist, MIN_VOCAB_COUNT);
        debug!(
            "Corpus has {} distinct words, {} kept in vocabulary.",
            corpus_dist.len(),
            vocabulary.len()
        );

        FeatureTableBuilder { descriptions, vocabulary }
    }

    pub fn from_reader<R: io::Read>(reader: R, has_header: bool) -> Result<FeatureTableBuilder> {
        let descriptions = read_descriptions(reader, has_header)?;
        Ok(FeatureTableBuilder::from_descriptions(descriptions))
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn header(&self) -> Vec<String> {
        let mut header = vec!(DESCRIPTION_HEADER.to_string(), LABEL_HEADER.to_string());
        header.extend(self.vocabulary.words().iter().cloned());
        header
    }

    /// Counts come from `description` alone; the label from its full text.
    pub fn feature_row(&self, description: &str) -> FeatureRow {
        let dist = TextAnalyzer::new(description).freq_dist(1);
        let polarity = TextAnalyzer::polarity(description);
        FeatureRow {
            description: description.to_string(),
            label: Label::from_compound(polarity.compound),
            counts: self.vocabulary.vectorize(&dist),
        }
    }

    /// Rows in description order, computed as they are pulled.
    pub fn rows(&self) -> impl Iterator<Item = FeatureRow> + '_ {
        self.descriptions.iter().map(move |d| self.feature_row(d))
    }

    /// Writes the header and then each row as soon as it is computed.
    /// Returns the number of data rows written.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<usize> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);

        writer.write_record(&self.header())?;
        let mut written = 0;
        for row in self.rows() {
            writer.write_record(&row.to_record())?;
            written += 1;
        }
        writer.flush()?;
        Ok(written)
    }
}

/// Paths and input layout for one batch run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub has_header: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            has_header: true,
        }
    }
}

/// Reads the whole input, then writes the feature table to the output path.
pub fn run(config: &Config) -> Result<usize> {
    info!("Reading descriptions from {}.", config.input.display());
    let input = File::open(&config.input)?;
    let builder = FeatureTableBuilder::from_reader(input, config.has_header)?;
    info!(
        "Retained {} descriptions, vocabulary of {} words.",
        builder.descriptions().len(),
        builder.vocabulary().len()
    );

    let output = File::create(&config.output)?;
    let written = builder.write_csv(output)?;
    info!("Wrote {} rows to {}.", written, config.output.display());
    Ok(written)
}
