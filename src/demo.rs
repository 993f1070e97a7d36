use rna_tools::{transcribe, translate_rna};

use std::env;
use std::error::Error;

const DEMO_DNA: &str = "CTACGGCAGTCAATTTGCCATC";
const DEMO_RNA: &str = "GAUGCCGUCAGUUAAACGGUAGGAAUUAGGGAUGCCGUCAGUUAAACGGUAG";

// Prints one transcription and one translation. The first argument, if
// given, replaces the DNA input.
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let dna = args.get(1).map(|s| s.as_str()).unwrap_or(DEMO_DNA);

    println!("Input: {}", dna);
    println!("Output: {}", transcribe(dna)?);

    let chains = translate_rna(DEMO_RNA)?;
    for (i, chain) in chains.iter().enumerate() {
        let residues: Vec<String> = chain.iter().map(|aa| aa.to_string()).collect();
        println!("Chain {}: {}", i, residues.join(", "));
    }

    Ok(())
}
