use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The mutscreen developers",
    version,
    about = "mutscreen - combinatorial mutant generation for in-silico mutagenesis screening.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a combinatorial mutant catalog from a wild-type sequence.
    Screen(ScreenArgs),
    /// List the supported substitution matrices.
    Matrices,
    /// Strip query-gap columns from an aligned FASTA file.
    Ungap(UngapArgs),
    /// Inspect a score table produced by the external evolutionary scorer.
    Scores(ScoresArgs),
}

/// Arguments for the `screen` subcommand.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Wild-type sequence: a FASTA file path or raw FASTA text.
    #[arg(short, long, required = true, value_name = "PATH_OR_FASTA")]
    pub sequence: String,

    /// Kind of the wild-type sequence ('protein' or 'nucleotide').
    #[arg(long, value_name = "KIND")]
    pub input_kind: Option<String>,

    /// Comma-separated 1-based positions to mutate (e.g. '1,3,5').
    #[arg(short, long, value_name = "LIST")]
    pub positions: Option<String>,

    /// Comma-separated 1-based positions every mutant must include.
    #[arg(long, value_name = "LIST")]
    pub mandatory: Option<String>,

    /// Maximal number of mutations per mutant.
    #[arg(long, value_name = "INT")]
    pub max_mutations: Option<usize>,

    /// Substitution matrix to rank candidates with (see `matrices`).
    #[arg(short, long, value_name = "NAME")]
    pub matrix: Option<String>,

    /// Substituent choice: 'True' ranks candidates closest-first,
    /// 'False' furthest-first.
    #[arg(long, value_name = "True|False")]
    pub preserve: Option<String>,

    /// Reproduce the historical codon choice (last listed synonymous codon).
    #[arg(long)]
    pub legacy_codons: bool,

    /// Ceiling on the number of enumerated position subsets.
    #[arg(long, value_name = "INT")]
    pub max_combinations: Option<u64>,

    /// Path for the newline-joined mutant name list.
    #[arg(long, value_name = "PATH")]
    pub names_out: Option<PathBuf>,

    /// Path for a tab-separated export of names and sequences.
    #[arg(long, value_name = "PATH")]
    pub catalog_out: Option<PathBuf>,

    /// TOML configuration file; CLI flags override its values.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `ungap` subcommand.
#[derive(Args, Debug)]
pub struct UngapArgs {
    /// Aligned FASTA input; the first record is the query.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the ungapped FASTA output.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `scores` subcommand.
#[derive(Args, Debug)]
pub struct ScoresArgs {
    /// Score table written by the scorer (e.g. WT_normPred_evolCombi.txt).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Parse the table as a screening-mode position grid instead of
    /// per-mutant rows.
    #[arg(long)]
    pub screening: bool,
}
