//! End-to-end runs of the feature table pipeline over files on disk.

use std::fs;

use tempfile::TempDir;
use ticket_ngrams::{run, Config, Error, FeatureTableBuilder, Label, TextAnalyzer};

const TICKETS: &str = "\
ticket_id,description
101,\"Printer on floor 3 jammed, again.\"
102,   
103,VPN drops every hour; VPN client crashed
104,\"Thanks, the printer works now\"
105,Batch job abended overnight
106,batch job rerun ok
";

fn write_input(dir: &TempDir, contents: &str) -> Config {
    let input = dir.path().join("tickets.csv");
    fs::write(&input, contents).unwrap();
    Config {
        input,
        output: dir.path().join("tickets_freq.csv"),
        has_header: true,
    }
}

fn read_rows(config: &Config) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&config.output)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
        .collect()
}

#[test]
fn test_feature_table_end_to_end() {
    let dir = TempDir::new().unwrap();
    let config = write_input(&dir, TICKETS);

    assert_eq!(run(&config).unwrap(), 5);

    let rows = read_rows(&config);
    assert_eq!(rows[0], vec!["Description", "Label", "printer", "vpn", "batch", "job"]);
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|row| row.len() == 6));

    assert_eq!(rows[1][0], "Printer on floor 3 jammed, again.");
    assert_eq!(&rows[1][2..], &["1", "0", "0", "0"]);
    assert_eq!(&rows[2][2..], &["0", "2", "0", "0"]);
    assert_eq!(rows[3][1], "info");
    assert_eq!(rows[4][1], "issue");
    assert_eq!(&rows[4][2..], &["0", "0", "1", "1"]);
}

#[test]
fn test_counts_match_each_rows_own_tokens() {
    let builder = FeatureTableBuilder::from_reader(TICKETS.as_bytes(), true).unwrap();
    let vocabulary = builder.vocabulary().words().to_vec();

    for row in builder.rows() {
        let analyzer = TextAnalyzer::new(&row.description);
        for (word, count) in vocabulary.iter().zip(&row.counts) {
            let expected = analyzer.tokens().iter().filter(|t| *t == word).count();
            assert_eq!(*count, expected, "{} in {:?}", word, row.description);
        }
        let compound = TextAnalyzer::polarity(&row.description).compound;
        assert_eq!(row.label, Label::from_compound(compound));
    }
}

#[test]
fn test_vocabulary_only_holds_repeated_words() {
    let builder = FeatureTableBuilder::from_reader(TICKETS.as_bytes(), true).unwrap();
    let corpus = TextAnalyzer::new(&builder.descriptions().join("\n")).freq_dist(1);

    for word in builder.vocabulary().words() {
        assert!(corpus.word_count(word) > 1);
    }
    for (ngram, count) in corpus.iter() {
        if count <= 1 {
            assert!(!builder.vocabulary().words().contains(&ngram[0]));
        }
    }
}

#[test]
fn test_output_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let config = write_input(&dir, TICKETS);

    run(&config).unwrap();
    let first = fs::read(&config.output).unwrap();
    run(&config).unwrap();
    let second = fs::read(&config.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_server_down_scenario() {
    let dir = TempDir::new().unwrap();
    let config = write_input(&dir, "id,description\n1,Server down\n2,Server down\n3,\n");

    assert_eq!(run(&config).unwrap(), 2);

    // "down" is an English stopword and carries no valence.
    let rows = read_rows(&config);
    assert_eq!(rows, vec![
        vec!["Description", "Label", "server"],
        vec!["Server down", "info", "1"],
        vec!["Server down", "info", "1"],
    ]);
}

#[test]
fn test_single_unrepeated_word_gets_no_column() {
    let dir = TempDir::new().unwrap();
    let config = write_input(&dir, "id,description\n1,ok\n");

    run(&config).unwrap();
    let rows = read_rows(&config);
    assert_eq!(rows, vec![vec!["Description", "Label"], vec!["ok", "info"]]);
}

#[test]
fn test_headerless_input() {
    let dir = TempDir::new().unwrap();
    let mut config = write_input(&dir, "1,disk full\n2,disk full\n");
    config.has_header = false;

    assert_eq!(run(&config).unwrap(), 2);
    let rows = read_rows(&config);
    assert_eq!(rows[0], vec!["Description", "Label", "disk", "full"]);
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        input: dir.path().join("missing.csv"),
        output: dir.path().join("out.csv"),
        has_header: true,
    };

    match run(&config) {
        Err(Error::Io(_)) => {}
        other => panic!("expected I/O error, got {:?}", other),
    }
    assert!(!config.output.exists());
}

#[test]
fn test_malformed_row_aborts_before_output() {
    let dir = TempDir::new().unwrap();
    let config = write_input(&dir, "id,description\n1,fine\n2\n");

    match run(&config) {
        Err(Error::MalformedRecord { line, fields }) => {
            assert_eq!(line, 3);
            assert_eq!(fields, 1);
        }
        other => panic!("expected malformed record, got {:?}", other),
    }
    assert!(!config.output.exists());
}
