//! CSV deck parsing and validation

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIME type accepted for deck files
pub const CSV_MIME_TYPE: &str = "text/csv";

/// File extension accepted for deck files
pub const CSV_EXTENSION: &str = "csv";

/// Byte-order mark some editors put at the start of UTF-8 files
const UTF8_BOM: char = '\u{FEFF}';

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("The CSV file is empty")]
    EmptyInput,

    #[error("Error parsing CSV file: {0}")]
    Parse(String),

    #[error("No valid data found in the CSV file")]
    NoValidRecords,

    #[error("Please choose a CSV file")]
    UnsupportedFileType,

    #[error("Error reading the file: {0}")]
    Read(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;

/// A validated question/answer row, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPair {
    pub question: String,
    pub answer: String,
}

impl CardPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Parse CSV text into question/answer pairs.
///
/// Rows with fewer than two fields, or whose first or second field is blank
/// after trimming, are dropped without being reported. Columns past the
/// second are ignored.
pub fn parse_cards(content: &str) -> Result<Vec<CardPair>> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    if content.trim().is_empty() {
        return Err(ImportError::EmptyInput);
    }

    // Backslash only escapes a quote character; the csv reader's own escape
    // handling would also swallow the backslash of `\frac` and friends.
    let normalized = normalize_quotes(content).map_err(ImportError::Parse)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .from_reader(normalized.as_bytes());

    let mut cards = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| ImportError::Parse(e.to_string()))?;
        match accept_record(&record) {
            Some(pair) => cards.push(pair),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {} CSV rows without a question and answer", dropped);
    }

    if cards.is_empty() {
        return Err(ImportError::NoValidRecords);
    }

    log::debug!("Parsed {} cards", cards.len());
    Ok(cards)
}

fn accept_record(record: &csv::StringRecord) -> Option<CardPair> {
    let question = record.get(0)?.trim();
    let answer = record.get(1)?.trim();

    if question.is_empty() || answer.is_empty() {
        return None;
    }

    Some(CardPair::new(question, answer))
}

/// Rewrite `\"` inside quoted fields as `""` and reject malformed quoting:
/// a quoted field that never closes, or text after a closing quote. A quote
/// only opens a field at its start. Errors name the line they occur on.
fn normalize_quotes(content: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(content.len());
    let mut line = 1;
    let mut field_start = true;
    let mut after_close = false;
    let mut open_since: Option<usize> = None;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if open_since.is_some() {
            match c {
                '\\' if chars.peek() == Some(&'"') => {
                    chars.next();
                    out.push_str("\"\"");
                }
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    out.push_str("\"\"");
                }
                '"' => {
                    open_since = None;
                    field_start = false;
                    after_close = true;
                    out.push(c);
                }
                '\n' => {
                    line += 1;
                    out.push(c);
                }
                _ => out.push(c),
            }
            continue;
        }

        if after_close && !matches!(c, ',' | '\n' | '\r') {
            return Err(format!(
                "Trailing quote on quoted field is malformed (line {})",
                line
            ));
        }

        match c {
            '"' if field_start => open_since = Some(line),
            ',' => {
                field_start = true;
                after_close = false;
            }
            '\n' => {
                line += 1;
                field_start = true;
                after_close = false;
            }
            '\r' => {}
            _ => field_start = false,
        }
        out.push(c);
    }

    match open_since {
        Some(line) => Err(format!("Quoted field unterminated (line {})", line)),
        None => Ok(out),
    }
}

/// Check that a file looks like a CSV deck, by MIME type or extension
pub fn check_file_type(name: &str, mime: Option<&str>) -> Result<()> {
    if mime == Some(CSV_MIME_TYPE) {
        return Ok(());
    }

    let has_csv_extension = Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION));

    if has_csv_extension {
        Ok(())
    } else {
        Err(ImportError::UnsupportedFileType)
    }
}

/// Read and parse a deck file from disk
pub fn read_cards(path: &Path) -> Result<Vec<CardPair>> {
    check_file_type(&path.to_string_lossy(), None)?;
    let content = fs::read_to_string(path)?;
    parse_cards(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_cards() {
        let cards = parse_cards("2+2=?,4\nCapital of France?,Paris\n").unwrap();
        assert_eq!(
            cards,
            vec![
                CardPair::new("2+2=?", "4"),
                CardPair::new("Capital of France?", "Paris"),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_cards(""), Err(ImportError::EmptyInput)));
        assert!(matches!(parse_cards("  \n\t\n"), Err(ImportError::EmptyInput)));
    }

    #[test]
    fn test_single_column_has_no_valid_records() {
        assert!(matches!(
            parse_cards("onlyonecolumn\n"),
            Err(ImportError::NoValidRecords)
        ));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let cards = parse_cards("\nq1,a1\n\n\nq2,a2\n\n").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].question, "q2");
    }

    #[test]
    fn test_fields_trimmed_and_extra_columns_ignored() {
        let cards = parse_cards("  What?  ,  That  ,extra,more\n").unwrap();
        assert_eq!(cards, vec![CardPair::new("What?", "That")]);
    }

    #[test]
    fn test_rows_with_blank_fields_dropped() {
        let cards = parse_cards("q1,a1\n   ,a2\nq3,   \nq4\nq5,a5\n").unwrap();
        let questions: Vec<&str> = cards.iter().map(|c| c.question.as_str()).collect();
        assert_eq!(questions, vec!["q1", "q5"]);
    }

    #[test]
    fn test_quoted_fields_keep_commas_and_newlines() {
        let cards = parse_cards("\"List a, b, c\",\"line one\nline two\"\n").unwrap();
        assert_eq!(cards[0].question, "List a, b, c");
        assert_eq!(cards[0].answer, "line one\nline two");
    }

    #[test]
    fn test_backslash_escaped_quote() {
        let cards = parse_cards(r#""Say \"hi\"",greeting"#).unwrap();
        assert_eq!(cards[0].question, "Say \"hi\"");
    }

    #[test]
    fn test_latex_survives_parsing() {
        let cards = parse_cards("\"What is $\\int_0^1 x\\,dx$?\",\"$\\frac{1}{2}$\"\n").unwrap();
        assert_eq!(cards[0].question, "What is $\\int_0^1 x\\,dx$?");
        assert_eq!(cards[0].answer, "$\\frac{1}{2}$");
    }

    #[test]
    fn test_unterminated_quote_is_parse_error() {
        let err = parse_cards("q1,a1\n\"never closed,a2\n").unwrap_err();
        match err {
            ImportError::Parse(msg) => assert!(msg.contains("line 2"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_text_after_closing_quote_is_parse_error() {
        let err = parse_cards("\"a\"b,c\n").unwrap_err();
        match err {
            ImportError::Parse(msg) => {
                assert!(msg.contains("Trailing quote"), "{}", msg);
                assert!(msg.contains("line 1"), "{}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        // Closing quote followed by a delimiter or line end is fine
        let cards = parse_cards("\"a\",\"b\"\r\n\"c\",d").unwrap();
        assert_eq!(cards, vec![CardPair::new("a", "b"), CardPair::new("c", "d")]);
    }

    #[test]
    fn test_leading_bom_is_ignored() {
        let cards = parse_cards("\u{FEFF}q,a\n").unwrap();
        assert_eq!(cards, vec![CardPair::new("q", "a")]);

        let cards = parse_cards("\u{FEFF}\"Say \\\"hi\\\"\",x\n").unwrap();
        assert_eq!(cards[0].question, "Say \"hi\"");
        assert_eq!(cards[0].answer, "x");

        assert!(matches!(parse_cards("\u{FEFF}"), Err(ImportError::EmptyInput)));
    }

    #[test]
    fn test_bom_file_with_unterminated_quote() {
        let err = parse_cards("\u{FEFF}\"never closed,a\nq,a\n").unwrap_err();
        match err {
            ImportError::Parse(msg) => assert!(msg.contains("line 1"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ImportError::EmptyInput.to_string(), "The CSV file is empty");
        assert_eq!(
            ImportError::Parse("bad".to_string()).to_string(),
            "Error parsing CSV file: bad"
        );
        assert_eq!(
            ImportError::NoValidRecords.to_string(),
            "No valid data found in the CSV file"
        );
    }

    #[test]
    fn test_check_file_type() {
        assert!(check_file_type("deck.csv", None).is_ok());
        assert!(check_file_type("DECK.CSV", None).is_ok());
        assert!(check_file_type("deck.txt", Some("text/csv")).is_ok());
        assert!(matches!(
            check_file_type("deck.txt", None),
            Err(ImportError::UnsupportedFileType)
        ));
        assert!(matches!(
            check_file_type("csv", Some("text/plain")),
            Err(ImportError::UnsupportedFileType)
        ));
    }

    #[test]
    fn test_read_cards_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.csv");
        fs::write(&path, "q,a\n").unwrap();

        let cards = read_cards(&path).unwrap();
        assert_eq!(cards, vec![CardPair::new("q", "a")]);

        let missing = dir.path().join("missing.csv");
        assert!(matches!(read_cards(&missing), Err(ImportError::Read(_))));
    }
}
