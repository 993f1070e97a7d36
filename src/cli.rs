use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("rna_tools")
        .version("0.1.0")
        .about("DNA transcription and RNA translation with the standard genetic code")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Read sequences from this file, one per line. Default: positional arguments, or stdin if there are none.")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print debug logging to stderr")
                .global(true),
        )
        .subcommand(
            Command::new("transcribe")
                .about("Transcribe DNA into its complementary RNA.")
                .arg(Arg::new("sequences").num_args(0..).help("DNA sequences")),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate RNA into amino acid chains, one chain per start codon.")
                .arg(Arg::new("sequences").num_args(0..).help("RNA sequences"))
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_parser(["name", "three", "one"])
                        .default_value("name")
                        .help("Write amino acids as full names, three-letter codes or one-letter codes"),
                )
                .arg(
                    Arg::new("from-dna")
                        .long("from-dna")
                        .action(ArgAction::SetTrue)
                        .help("The input is DNA: transcribe it before translating"),
                ),
        )
        .subcommand(
            Command::new("codon")
                .about("Look up codons in the genetic code table.")
                .arg_required_else_help(true)
                .arg(Arg::new("codons").num_args(1..).required(true).help("RNA codons, e.g. AUG")),
        )
        .subcommand(
            Command::new("completions")
                .about("Print a shell completion script.")
                .arg_required_else_help(true)
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(clap::value_parser!(clap_complete::Shell)),
                ),
        )
}
