mod cli;

use rna_tools::{chains_to_string, codon_table, read_sequences, to_rna, transcribe, translate_rna, ResidueFormat};

use clap::ArgMatches;
use clap_complete::Shell;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    // RUST_LOG wins unless --verbose is given
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn get_sequences(args: &ArgMatches) -> Result<Vec<String>, Box<dyn Error>> {
    if let Some(infile) = args.get_one::<String>("input") {
        // From file
        tracing::debug!(file = %infile, "reading sequences");
        let file = File::open(infile)?;
        return Ok(read_sequences(BufReader::new(file))?);
    }

    let positional: Vec<String> = args
        .get_many::<String>("sequences")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();

    if positional.is_empty() {
        // From stdin
        Ok(read_sequences(io::stdin().lock())?)
    } else {
        Ok(positional)
    }
}

fn run_transcribe(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    for seq in get_sequences(args)? {
        println!("{}", transcribe(seq.as_str())?);
    }
    Ok(())
}

fn run_translate(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let format = match args.get_one::<String>("format").map(|s| s.as_str()) {
        Some("three") => ResidueFormat::Three,
        Some("one") => ResidueFormat::One,
        _ => ResidueFormat::Name,
    };
    let from_dna = args.get_flag("from-dna");

    for seq in get_sequences(args)? {
        let rna = if from_dna { transcribe(seq.as_str())? } else { to_rna(&seq)? };
        let chains = translate_rna(&rna)?;
        if chains.is_empty() {
            eprintln!("No start codon in {}", rna);
        } else {
            println!("{}", chains_to_string(&chains, format));
        }
    }
    Ok(())
}

fn run_codon(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut n_unrecognized = 0;
    for codon in args.get_many::<String>("codons").into_iter().flatten() {
        match codon_table(codon) {
            Ok(aa) => {
                let residue = aa.residue();
                println!("{}\t{}\t{}\t{}", aa.codon(), residue.name(), residue.three_letter(), residue.one_letter());
            }
            Err(e) => {
                eprintln!("{}", e);
                n_unrecognized += 1;
            }
        }
    }
    if n_unrecognized > 0 {
        return Err(format!("{} unrecognized codon(s)", n_unrecognized).into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let matches = cli::build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("transcribe", sub_matches)) => run_transcribe(sub_matches)?,
        Some(("translate", sub_matches)) => run_translate(sub_matches)?,
        Some(("codon", sub_matches)) => run_codon(sub_matches)?,
        Some(("completions", sub_matches)) => {
            if let Some(shell) = sub_matches.get_one::<Shell>("shell").copied() {
                clap_complete::generate(shell, &mut cli::build_cli(), "rna_tools", &mut io::stdout());
            }
        }
        _ => eprintln!("Unknown subcommand. Run with --help."),
    };

    Ok(())
}
