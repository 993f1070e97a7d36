//! Nucleotide alphabets and the validators built on them.
//!
//! Only the four canonical uppercase bases are accepted. There is no IUPAC
//! ambiguity support and no case folding: `acgt` is not valid DNA.

use crate::error::{Error, Result};

pub trait Alphabet {
    // Used in error messages
    const NAME: &'static str;

    const VALID_BYTES: &'static [u8];

    fn is_valid_char(c: char) -> bool {
        c.is_ascii() && Self::VALID_BYTES.contains(&(c as u8))
    }

    // Character offset of the first character not in the alphabet, if any.
    fn first_invalid(text: &str) -> Option<usize> {
        text.chars().position(|c| !Self::is_valid_char(c))
    }

    fn is_valid(text: &str) -> bool {
        Self::first_invalid(text).is_none()
    }

    fn validate(text: &str) -> Result<()> {
        match Self::first_invalid(text) {
            Some(position) => Err(Error::invalid_sequence(Self::NAME, text, position)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dna;

impl Alphabet for Dna {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rna;

impl Alphabet for Rna {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGU";
}

/// True iff every character of `text` is one of `A`, `C`, `G`, `T`.
/// The empty string is valid.
pub fn is_valid_dna(text: &str) -> bool {
    Dna::is_valid(text)
}

/// True iff every character of `text` is one of `A`, `C`, `G`, `U`.
/// The empty string is valid.
pub fn is_valid_rna(text: &str) -> bool {
    Rna::is_valid(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dna() {
        assert!(is_valid_dna("ACGT"));
        assert!(is_valid_dna("CTACGGCAGTCAATTTGCCATC"));
        assert!(is_valid_dna(""));
    }

    #[test]
    fn test_invalid_dna() {
        assert!(!is_valid_dna("ACGU")); // U is RNA only
        assert!(!is_valid_dna("acgt")); // Case sensitive
        assert!(!is_valid_dna("ACGN"));
        assert!(!is_valid_dna("AC GT"));
        assert!(!is_valid_dna("ACGTÅ"));
    }

    #[test]
    fn test_valid_rna() {
        assert!(is_valid_rna("ACGU"));
        assert!(is_valid_rna("AUGUUUUAA"));
        assert!(is_valid_rna(""));
    }

    #[test]
    fn test_invalid_rna() {
        assert!(!is_valid_rna("ACGT")); // T is DNA only
        assert!(!is_valid_rna("augu"));
        assert!(!is_valid_rna("AUG\n"));
    }

    #[test]
    fn test_first_invalid_counts_characters() {
        assert_eq!(Dna::first_invalid("ACGTUXXCTTAA"), Some(4));
        assert_eq!(Rna::first_invalid("ÅAUT"), Some(0));
        assert_eq!(Rna::first_invalid("AÅT"), Some(1));
        assert_eq!(Rna::first_invalid("AUGC"), None);
    }

    #[test]
    fn test_validate_names_alphabet() {
        match Rna::validate("AUGT") {
            Err(Error::InvalidSequence { alphabet, input, position }) => {
                assert_eq!(alphabet, "RNA");
                assert_eq!(input, "AUGT");
                assert_eq!(position, 3);
            }
            other => panic!("Expected InvalidSequence, got {:?}", other),
        }
        assert!(Dna::validate("GATTACA").is_ok());
    }
}
