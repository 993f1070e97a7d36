//! RNA to amino-acid chains.
//!
//! Every non-overlapping `AUG` found scanning left to right opens a reading
//! frame. The frame runs up to the next start codon (or the end of the
//! sequence) and must hit a stop codon before that, otherwise the whole
//! translation fails with [`Error::NoStopCodon`].

use crate::codon::{lookup, AminoAcid, ResidueFormat, START_CODON};
use crate::error::{Error, Result};
use crate::sequence::{Codon, IntoRna, RnaBase};

/// Residues from the initiator Methionine up to, not including, the stop codon.
pub type Chain = Vec<AminoAcid>;

// Offsets of non-overlapping start codons, left to right.
fn start_positions(bases: &[RnaBase]) -> Vec<usize> {
    let start = START_CODON.bases();
    let mut positions: Vec<usize> = vec![];
    let mut i = 0_usize;
    while i + 3 <= bases.len() {
        if bases[i..i + 3] == start {
            positions.push(i);
            i += 3; // Matches can't overlap
        } else {
            i += 1;
        }
    }
    positions
}

// Decodes the bases following one start codon. Returns None if the frame
// runs out before a stop codon.
fn decode_frame(frame: &[RnaBase]) -> Option<Chain> {
    let mut chain: Chain = vec![lookup(&START_CODON)];
    for (i, codon) in frame.chunks_exact(3).filter_map(Codon::from_slice).enumerate() {
        let aa = lookup(&codon);
        if aa.is_stop() {
            tracing::trace!(stop_offset = 3 * i, codon = %codon, "hit stop codon");
            return Some(chain);
        }
        chain.push(aa);
    }
    None // A trailing partial codon is never a stop
}

/// Translates RNA (text or typed) into one chain per start codon, in the
/// order the start codons occur.
///
/// Text input is parsed as RNA first and can fail with
/// [`Error::InvalidSequence`]. If any reading frame has no stop codon the
/// result is [`Error::NoStopCodon`] and no chains are returned. Sequences
/// without a start codon give an empty list.
pub fn translate_rna(rna: impl IntoRna) -> Result<Vec<Chain>> {
    let rna = rna.into_rna()?;
    let bases = rna.bases();
    let starts = start_positions(bases);
    tracing::debug!(length = bases.len(), start_codons = starts.len(), "translating");

    let mut chains: Vec<Chain> = Vec::with_capacity(starts.len());
    for (segment, &start) in starts.iter().enumerate() {
        let frame_begin = start + 3;
        let frame_end = starts.get(segment + 1).copied().unwrap_or(bases.len());
        match decode_frame(&bases[frame_begin..frame_end]) {
            Some(chain) => {
                tracing::debug!(segment, residues = chain.len(), "decoded chain");
                chains.push(chain);
            }
            None => return Err(Error::NoStopCodon { segment }),
        }
    }
    Ok(chains)
}

/// Writes chains one per line. Full names are separated by ", ", three-letter
/// codes by "-", and one-letter codes are written back to back.
pub fn chains_to_string(chains: &[Chain], format: ResidueFormat) -> String {
    let separator = match format {
        ResidueFormat::Name => ", ",
        ResidueFormat::Three => "-",
        ResidueFormat::One => "",
    };
    chains
        .iter()
        .map(|chain| {
            chain
                .iter()
                .map(|aa| aa.residue().render(format))
                .collect::<Vec<String>>()
                .join(separator)
        })
        .collect::<Vec<String>>()
        .join("\n")
}
