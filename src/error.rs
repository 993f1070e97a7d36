/// Everything that can go wrong while converting, transcribing or translating.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    // position is the character offset of the first character outside the alphabet
    #[error("invalid {alphabet} sequence {input:?}: unexpected character at position {position}")]
    InvalidSequence {
        alphabet: &'static str,
        input: String,
        position: usize,
    },

    // segment counts start codons from the left, starting at 0
    #[error("no stop codon found in the reading frame of start codon {segment}")]
    NoStopCodon { segment: usize },

    #[error("unrecognized codon {codon:?}")]
    UnrecognizedCodon { codon: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_sequence(alphabet: &'static str, input: &str, position: usize) -> Self {
        Error::InvalidSequence {
            alphabet,
            input: input.to_owned(),
            position,
        }
    }
}
