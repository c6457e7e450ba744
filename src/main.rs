#[macro_use] extern crate clap;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;

extern crate env_logger;

use std::io::Read;
use std::path::PathBuf;

use ticket_ngrams::features::{self, Config, DEFAULT_INPUT, DEFAULT_OUTPUT};
use ticket_ngrams::{PolarityScores, TextAnalyzer};

#[derive(Serialize, Debug)]
struct NgramCount {
    ngram: String,
    count: usize,
}

#[derive(Serialize, Debug)]
struct AnalyzedText {
    tokens: Vec<String>,
    ngrams: Vec<NgramCount>,
    polarity: PolarityScores,
}

fn cmd_features(input: &str, output: &str, has_header: bool) {
    let config = Config {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        has_header,
    };
    if let Err(err) = features::run(&config) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn cmd_analyze(n: usize, keyword: Option<&str>, top: Option<usize>, remove_stopwords: bool, remove_punctuation: bool) {
    let mut text = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut text) {
        error!("Couldn't read stdin: {}", err);
        std::process::exit(1);
    }

    let mut analyzer = TextAnalyzer::new(&text);
    analyzer.set_filter(remove_stopwords, remove_punctuation);
    let mut dist = analyzer.freq_dist(n);
    if let Some(keyword) = keyword {
        dist = TextAnalyzer::filter_freq_dist(&dist, &keyword.to_lowercase());
    }
    debug!("{} distinct {}-grams.", dist.len(), n);

    let entries = match top {
        Some(k) => dist.most_common(k),
        None => dist.iter().collect(),
    };
    let analyzed = AnalyzedText {
        tokens: analyzer.tokens().to_vec(),
        ngrams: entries.into_iter().map(|(ngram, count)| NgramCount { ngram: ngram.join(" "), count }).collect(),
        polarity: TextAnalyzer::polarity(&text),
    };
    match serde_json::to_string_pretty(&analyzed) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            error!("Couldn't serialize analysis: {}", err);
            std::process::exit(1);
        }
    }
}

fn parse_count(matches: &clap::ArgMatches, name: &str) -> Option<usize> {
    matches.value_of(name).map(|value| match value.parse::<usize>() {
        Ok(parsed) => parsed,
        Err(_) => {
            error!("Invalid value for --{}: `{}`", name, value);
            std::process::exit(1);
        }
    })
}

fn main() {
    let matches = clap_app!(app =>
        (version: crate_version!())
        (about: "Build bag-of-words feature tables from ticket descriptions.")
        (@setting SubcommandRequiredElseHelp)
        (@subcommand features =>
            (about: "Write the labeled unigram feature table for a CSV of (id, description) rows")
            (@arg input: "CSV file to read descriptions from (default data/ticket_Data.csv)")
            (@arg output: -o --output +takes_value "Where to write the feature table (default data/ticket_Data_freq.csv)")
            (@arg no_header: --("no-header") "The input CSV has no header row")
        )
        (@subcommand analyze =>
            (about: "Print token, n-gram and polarity statistics for text read from stdin as JSON")
            (@arg n: -n +takes_value "Width of the n-grams to count (default 1)")
            (@arg keyword: -k --keyword +takes_value "Only keep n-grams containing this word")
            (@arg top: --top +takes_value "Only print the most frequent n-grams")
            (@arg keep_stopwords: --("keep-stopwords") "Don't filter stopwords")
            (@arg keep_punctuation: --("keep-punctuation") "Don't filter punctuation")
        )
    ).get_matches();

    env_logger::init();

    if let Some(matches) = matches.subcommand_matches("features") {
        let input = matches.value_of("input").unwrap_or(DEFAULT_INPUT);
        let output = matches.value_of("output").unwrap_or(DEFAULT_OUTPUT);
        cmd_features(input, output, !matches.is_present("no_header"));
    } else if let Some(matches) = matches.subcommand_matches("analyze") {
        let n = parse_count(matches, "n").unwrap_or(1);
        let top = parse_count(matches, "top");
        cmd_analyze(
            n,
            matches.value_of("keyword"),
            top,
            !matches.is_present("keep_stopwords"),
            !matches.is_present("keep_punctuation"),
        );
    }
}
