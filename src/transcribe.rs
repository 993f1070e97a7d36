use crate::error::Result;
use crate::sequence::{DnaBase, IntoDna, RnaBase, RnaSequence};

// A->U, C->G, G->C, T->A
pub fn complement(base: DnaBase) -> RnaBase {
    match base {
        DnaBase::A => RnaBase::U,
        DnaBase::C => RnaBase::G,
        DnaBase::G => RnaBase::C,
        DnaBase::T => RnaBase::A,
    }
}

/// Transcribes DNA into its RNA complement, base by base.
///
/// Text input is parsed as DNA first, so it can fail with
/// [`crate::Error::InvalidSequence`]. The result always has the same length
/// as the input.
pub fn transcribe(dna: impl IntoDna) -> Result<RnaSequence> {
    let dna = dna.into_dna()?;
    let rna: RnaSequence = dna.iter().map(|&b| complement(b)).collect();
    tracing::trace!(length = rna.len(), "transcribed");
    Ok(rna)
}
