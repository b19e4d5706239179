//! Bundled sample deck

use std::fs;
use std::io;
use std::path::Path;

/// File name the sample deck is written under by default
pub const SAMPLE_FILE_NAME: &str = "sample.csv";

/// Contents of the sample deck
pub const SAMPLE_CSV: &str = include_str!("../assets/sample.csv");

/// Write the sample deck to `path`. Refuses to replace an existing file
/// unless `overwrite` is set.
pub fn write_sample(path: &Path, overwrite: bool) -> io::Result<()> {
    if path.exists() && !overwrite {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }

    fs::write(path, SAMPLE_CSV)?;
    log::info!("Wrote sample deck to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::parse_cards;
    use crate::markup::contains_markup;

    #[test]
    fn test_sample_parses() {
        let cards = parse_cards(SAMPLE_CSV).unwrap();
        assert_eq!(cards.len(), 10);
        assert_eq!(cards[0].answer, "Paris");
        assert_eq!(cards[6].answer, "Red, yellow, blue");
        assert_eq!(cards[8].question, "Who wrote \"Hamlet\"?");
    }

    #[test]
    fn test_sample_mixes_markup_and_plain() {
        let cards = parse_cards(SAMPLE_CSV).unwrap();
        assert!(cards.iter().any(|c| contains_markup(&c.answer)));
        assert!(cards.iter().any(|c| !contains_markup(&c.question)));
        assert_eq!(cards[3].answer, "$\\frac{1}{2}$");
    }

    #[test]
    fn test_write_sample_respects_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SAMPLE_FILE_NAME);

        write_sample(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_CSV);

        let err = write_sample(&path, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);

        write_sample(&path, true).unwrap();
    }
}
