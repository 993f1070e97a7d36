//! The standard genetic code.
//!
//! Maps each of the 64 RNA codons to one of 20 amino acids or to the stop
//! signal. Text that is not exactly three RNA bases has no entry in the table
//! and is reported as [`crate::Error::UnrecognizedCodon`].

use std::fmt;

use crate::error::Result;
use crate::sequence::{Codon, RnaBase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Residue {
    Methionine,
    Leucine,
    Isoleucine,
    Phenylalanine,
    Valine,
    Serine,
    Proline,
    Threonine,
    Alanine,
    Tyrosine,
    Histidine,
    Glutamine,
    Asparagine,
    Lysine,
    AsparticAcid,
    GlutamicAcid,
    Cysteine,
    Tryptophan,
    Arginine,
    Glycine,
    Stop,
}

/// How a residue is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResidueFormat {
    #[default]
    Name, // "Methionine"
    Three, // "Met"
    One,   // "M"
}

impl Residue {
    pub fn name(self) -> &'static str {
        match self {
            Residue::Methionine => "Methionine",
            Residue::Leucine => "Leucine",
            Residue::Isoleucine => "Iso-Leucine",
            Residue::Phenylalanine => "Phenylalanine",
            Residue::Valine => "Valine",
            Residue::Serine => "Serine",
            Residue::Proline => "Proline",
            Residue::Threonine => "Threonine",
            Residue::Alanine => "Alanine",
            Residue::Tyrosine => "Tyrosine",
            Residue::Histidine => "Histidine",
            Residue::Glutamine => "Glutamine",
            Residue::Asparagine => "Asparagine",
            Residue::Lysine => "Lysine",
            Residue::AsparticAcid => "Aspartic Acid",
            Residue::GlutamicAcid => "Glutamic Acid",
            Residue::Cysteine => "Cysteine",
            Residue::Tryptophan => "Tryptophan",
            Residue::Arginine => "Arginine",
            Residue::Glycine => "Glycine",
            Residue::Stop => "Stop",
        }
    }

    pub fn three_letter(self) -> &'static str {
        match self {
            Residue::Methionine => "Met",
            Residue::Leucine => "Leu",
            Residue::Isoleucine => "Ile",
            Residue::Phenylalanine => "Phe",
            Residue::Valine => "Val",
            Residue::Serine => "Ser",
            Residue::Proline => "Pro",
            Residue::Threonine => "Thr",
            Residue::Alanine => "Ala",
            Residue::Tyrosine => "Tyr",
            Residue::Histidine => "His",
            Residue::Glutamine => "Gln",
            Residue::Asparagine => "Asn",
            Residue::Lysine => "Lys",
            Residue::AsparticAcid => "Asp",
            Residue::GlutamicAcid => "Glu",
            Residue::Cysteine => "Cys",
            Residue::Tryptophan => "Trp",
            Residue::Arginine => "Arg",
            Residue::Glycine => "Gly",
            Residue::Stop => "Ter",
        }
    }

    pub fn one_letter(self) -> char {
        match self {
            Residue::Methionine => 'M',
            Residue::Leucine => 'L',
            Residue::Isoleucine => 'I',
            Residue::Phenylalanine => 'F',
            Residue::Valine => 'V',
            Residue::Serine => 'S',
            Residue::Proline => 'P',
            Residue::Threonine => 'T',
            Residue::Alanine => 'A',
            Residue::Tyrosine => 'Y',
            Residue::Histidine => 'H',
            Residue::Glutamine => 'Q',
            Residue::Asparagine => 'N',
            Residue::Lysine => 'K',
            Residue::AsparticAcid => 'D',
            Residue::GlutamicAcid => 'E',
            Residue::Cysteine => 'C',
            Residue::Tryptophan => 'W',
            Residue::Arginine => 'R',
            Residue::Glycine => 'G',
            Residue::Stop => '*',
        }
    }

    pub fn is_stop(self) -> bool {
        self == Residue::Stop
    }

    pub fn render(self, format: ResidueFormat) -> String {
        match format {
            ResidueFormat::Name => self.name().to_owned(),
            ResidueFormat::Three => self.three_letter().to_owned(),
            ResidueFormat::One => self.one_letter().to_string(),
        }
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A residue together with the codon it was decoded from.
///
/// Only the codon table hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AminoAcid {
    residue: Residue,
    codon: Codon,
}

impl AminoAcid {
    pub fn residue(&self) -> Residue {
        self.residue
    }

    pub fn name(&self) -> &'static str {
        self.residue.name()
    }

    pub fn codon(&self) -> Codon {
        self.codon
    }

    pub fn is_stop(&self) -> bool {
        self.residue.is_stop()
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.residue.name(), self.codon)
    }
}

pub const START_CODON: Codon = Codon::from_bases(RnaBase::A, RnaBase::U, RnaBase::G);

pub const STOP_CODONS: [Codon; 3] = [
    Codon::from_bases(RnaBase::U, RnaBase::A, RnaBase::A),
    Codon::from_bases(RnaBase::U, RnaBase::A, RnaBase::G),
    Codon::from_bases(RnaBase::U, RnaBase::G, RnaBase::A),
];

fn residue_of(codon: Codon) -> Residue {
    use RnaBase::{A, C, G, U};

    match codon.bases() {
        [U, U, U | C] => Residue::Phenylalanine,
        [U, U, A | G] => Residue::Leucine,
        [C, U, _] => Residue::Leucine,
        [A, U, U | C | A] => Residue::Isoleucine,
        [A, U, G] => Residue::Methionine,
        [G, U, _] => Residue::Valine,

        [U, C, _] => Residue::Serine,
        [C, C, _] => Residue::Proline,
        [A, C, _] => Residue::Threonine,
        [G, C, _] => Residue::Alanine,

        [U, A, U | C] => Residue::Tyrosine,
        [U, A, A | G] => Residue::Stop,
        [C, A, U | C] => Residue::Histidine,
        [C, A, A | G] => Residue::Glutamine,
        [A, A, U | C] => Residue::Asparagine,
        [A, A, A | G] => Residue::Lysine,
        [G, A, U | C] => Residue::AsparticAcid,
        [G, A, A | G] => Residue::GlutamicAcid,

        [U, G, U | C] => Residue::Cysteine,
        [U, G, A] => Residue::Stop,
        [U, G, G] => Residue::Tryptophan,
        [C, G, _] => Residue::Arginine,
        [A, G, U | C] => Residue::Serine,
        [A, G, A | G] => Residue::Arginine,
        [G, G, _] => Residue::Glycine,
    }
}

/// Decodes a codon. Every [`Codon`] is one of the 64 canonical triplets, so
/// this cannot fail.
pub fn lookup(codon: &Codon) -> AminoAcid {
    AminoAcid { residue: residue_of(*codon), codon: *codon }
}

// Codon text or an already typed codon.
pub trait CodonInput {
    fn into_codon(self) -> Result<Codon>;
}

impl CodonInput for &str {
    fn into_codon(self) -> Result<Codon> {
        self.parse()
    }
}

impl CodonInput for String {
    fn into_codon(self) -> Result<Codon> {
        self.parse()
    }
}

impl CodonInput for &String {
    fn into_codon(self) -> Result<Codon> {
        self.parse()
    }
}

impl CodonInput for Codon {
    fn into_codon(self) -> Result<Codon> {
        Ok(self)
    }
}

impl CodonInput for &Codon {
    fn into_codon(self) -> Result<Codon> {
        Ok(*self)
    }
}

/// Looks up a codon given as text or as a [`Codon`].
///
/// Text that is not exactly three of `A`, `C`, `G`, `U` gives
/// [`crate::Error::UnrecognizedCodon`]. It never falls back to some amino acid.
pub fn codon_table(codon: impl CodonInput) -> Result<AminoAcid> {
    let codon = codon.into_codon()?;
    Ok(lookup(&codon))
}
