//! Typed DNA and RNA sequences.
//!
//! A sequence is built once from validated text (or from bases that are
//! already typed) and is never modified afterwards.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{Alphabet, Dna, Rna};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DnaBase {
    A,
    C,
    G,
    T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RnaBase {
    A,
    C,
    G,
    U,
}

impl DnaBase {
    pub fn from_char(c: char) -> Option<DnaBase> {
        match c {
            'A' => Some(DnaBase::A),
            'C' => Some(DnaBase::C),
            'G' => Some(DnaBase::G),
            'T' => Some(DnaBase::T),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            DnaBase::A => 'A',
            DnaBase::C => 'C',
            DnaBase::G => 'G',
            DnaBase::T => 'T',
        }
    }
}

impl RnaBase {
    pub fn from_char(c: char) -> Option<RnaBase> {
        match c {
            'A' => Some(RnaBase::A),
            'C' => Some(RnaBase::C),
            'G' => Some(RnaBase::G),
            'U' => Some(RnaBase::U),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            RnaBase::A => 'A',
            RnaBase::C => 'C',
            RnaBase::G => 'G',
            RnaBase::U => 'U',
        }
    }
}

impl TryFrom<char> for DnaBase {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        DnaBase::from_char(c).ok_or_else(|| Error::invalid_sequence(Dna::NAME, &c.to_string(), 0))
    }
}

impl TryFrom<char> for RnaBase {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        RnaBase::from_char(c).ok_or_else(|| Error::invalid_sequence(Rna::NAME, &c.to_string(), 0))
    }
}

impl fmt::Display for DnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for RnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DnaSequence {
    bases: Vec<DnaBase>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RnaSequence {
    bases: Vec<RnaBase>,
}

impl DnaSequence {
    pub fn bases(&self) -> &[DnaBase] {
        &self.bases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DnaBase> {
        self.bases.iter()
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl RnaSequence {
    pub fn bases(&self) -> &[RnaBase] {
        &self.bases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RnaBase> {
        self.bases.iter()
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    // Successive non-overlapping codons from the first base. A trailing
    // partial codon is not returned.
    pub fn codons(&self) -> impl Iterator<Item = Codon> + '_ {
        self.bases.chunks_exact(3).filter_map(Codon::from_slice)
    }
}

impl FromIterator<DnaBase> for DnaSequence {
    fn from_iter<I: IntoIterator<Item = DnaBase>>(iter: I) -> Self {
        DnaSequence { bases: iter.into_iter().collect() }
    }
}

impl FromIterator<RnaBase> for RnaSequence {
    fn from_iter<I: IntoIterator<Item = RnaBase>>(iter: I) -> Self {
        RnaSequence { bases: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a DnaSequence {
    type Item = &'a DnaBase;
    type IntoIter = std::slice::Iter<'a, DnaBase>;

    fn into_iter(self) -> Self::IntoIter {
        self.bases.iter()
    }
}

impl<'a> IntoIterator for &'a RnaSequence {
    type Item = &'a RnaBase;
    type IntoIter = std::slice::Iter<'a, RnaBase>;

    fn into_iter(self) -> Self::IntoIter {
        self.bases.iter()
    }
}

// Displays as the flat base string, e.g. "AUGUUUUAA"
impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bases.iter() {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bases.iter() {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}

/// Parses DNA text into a [`DnaSequence`], one base per character, in order.
///
/// Fails with [`Error::InvalidSequence`] naming the DNA alphabet if any
/// character is not one of `A`, `C`, `G`, `T`.
pub fn to_dna(text: &str) -> Result<DnaSequence> {
    Dna::validate(text)?;
    Ok(text.chars().filter_map(DnaBase::from_char).collect())
}

/// Parses RNA text into an [`RnaSequence`], one base per character, in order.
///
/// Fails with [`Error::InvalidSequence`] naming the RNA alphabet if any
/// character is not one of `A`, `C`, `G`, `U`.
pub fn to_rna(text: &str) -> Result<RnaSequence> {
    Rna::validate(text)?;
    Ok(text.chars().filter_map(RnaBase::from_char).collect())
}

impl FromStr for DnaSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        to_dna(s)
    }
}

impl FromStr for RnaSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        to_rna(s)
    }
}

// Anything that can be turned into DNA: raw text goes through the converter,
// typed sequences are passed through as they are.
pub trait IntoDna {
    fn into_dna(self) -> Result<DnaSequence>;
}

pub trait IntoRna {
    fn into_rna(self) -> Result<RnaSequence>;
}

impl IntoDna for &str {
    fn into_dna(self) -> Result<DnaSequence> {
        to_dna(self)
    }
}

impl IntoDna for String {
    fn into_dna(self) -> Result<DnaSequence> {
        to_dna(&self)
    }
}

impl IntoDna for &String {
    fn into_dna(self) -> Result<DnaSequence> {
        to_dna(self)
    }
}

impl IntoDna for DnaSequence {
    fn into_dna(self) -> Result<DnaSequence> {
        Ok(self)
    }
}

impl IntoDna for &DnaSequence {
    fn into_dna(self) -> Result<DnaSequence> {
        Ok(self.clone())
    }
}

impl IntoRna for &str {
    fn into_rna(self) -> Result<RnaSequence> {
        to_rna(self)
    }
}

impl IntoRna for String {
    fn into_rna(self) -> Result<RnaSequence> {
        to_rna(&self)
    }
}

impl IntoRna for &String {
    fn into_rna(self) -> Result<RnaSequence> {
        to_rna(self)
    }
}

impl IntoRna for RnaSequence {
    fn into_rna(self) -> Result<RnaSequence> {
        Ok(self)
    }
}

impl IntoRna for &RnaSequence {
    fn into_rna(self) -> Result<RnaSequence> {
        Ok(self.clone())
    }
}

/// Exactly three RNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([RnaBase; 3]);

impl Codon {
    pub const fn from_bases(first: RnaBase, second: RnaBase, third: RnaBase) -> Codon {
        Codon([first, second, third])
    }

    // None unless the slice has exactly three bases
    pub fn from_slice(bases: &[RnaBase]) -> Option<Codon> {
        match bases {
            [a, b, c] => Some(Codon([*a, *b, *c])),
            _ => None,
        }
    }

    pub fn bases(&self) -> [RnaBase; 3] {
        self.0
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

// Anything that is not exactly three RNA bases is an unrecognized codon.
impl FromStr for Codon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bases: Option<Vec<RnaBase>> = s.chars().map(RnaBase::from_char).collect();
        bases
            .as_deref()
            .and_then(Codon::from_slice)
            .ok_or_else(|| Error::UnrecognizedCodon { codon: s.to_owned() })
    }
}
