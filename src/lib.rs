//! DNA transcription and RNA translation with the standard genetic code.
//!
//! ```
//! let rna = rna_tools::transcribe("CTACGGCAGTCAATTTGCCATC").unwrap();
//! assert_eq!(rna.to_string(), "GAUGCCGUCAGUUAAACGGUAG");
//!
//! let chains = rna_tools::translate_rna(&rna).unwrap();
//! let names: Vec<&str> = chains[0].iter().map(|aa| aa.name()).collect();
//! assert_eq!(names, ["Methionine", "Proline", "Serine", "Valine", "Lysine", "Arginine"]);
//! ```

pub mod alphabet;
pub mod codon;
pub mod error;
pub mod sequence;
pub mod transcribe;
pub mod translate;

use std::io::BufRead;

pub use alphabet::{is_valid_dna, is_valid_rna, Alphabet, Dna, Rna};
pub use codon::{codon_table, lookup, AminoAcid, CodonInput, Residue, ResidueFormat, START_CODON, STOP_CODONS};
pub use error::{Error, Result};
pub use sequence::{to_dna, to_rna, Codon, DnaBase, DnaSequence, IntoDna, IntoRna, RnaBase, RnaSequence};
pub use transcribe::transcribe;
pub use translate::{chains_to_string, translate_rna, Chain};

// Reads one sequence per non-empty line. Surrounding whitespace is dropped.
pub fn read_sequences(input: impl BufRead) -> Result<Vec<String>> {
    let mut seqs: Vec<String> = vec![];
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            seqs.push(line.to_owned());
        }
    }
    Ok(seqs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_sequences() {
        let data = "ACGT\n\n  GATTACA \r\nTTT";
        let seqs = read_sequences(Cursor::new(data)).unwrap();
        assert_eq!(seqs, vec!["ACGT", "GATTACA", "TTT"]);
    }

    #[test]
    fn test_read_sequences_empty() {
        assert!(read_sequences(Cursor::new("")).unwrap().is_empty());
    }
}
