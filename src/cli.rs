//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use abstracts_core::stats::DEFAULT_BINS;
use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand};

/// Default number of abstracts printed by `sample`.
pub const DEFAULT_SAMPLE_COUNT: usize = 5;

/// Default number of words printed by `words`.
pub const DEFAULT_TOP_WORDS: usize = 30;

/// Explore and normalize a corpus of grant-award abstracts.
///
/// Abstracts reads a directory of award XML records, drops records without
/// an abstract, and prints cleaned abstracts and corpus statistics.
#[derive(Parser, Debug)]
#[command(name = "abstracts")]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding the award XML records
    #[arg(short = 'd', long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Record file suffix (default ".xml")
    #[arg(long, global = true, value_name = "EXT")]
    pub extension: Option<String>,

    /// Print abstracts exactly as stored, without cleaning
    #[arg(long, global = true)]
    pub raw: bool,

    /// Reduce cleaned words to their lemma
    #[arg(long, global = true, conflicts_with = "raw")]
    pub lemmatize: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count records, show which award fields they carry and how long abstracts are
    Summary {
        /// Histogram bins for abstract lengths (1-100)
        #[arg(long, default_value_t = DEFAULT_BINS, value_parser = clap::value_parser!(u16).range(1..=100).map(usize::from))]
        bins: usize,
    },

    /// Print the abstract at an index
    Show {
        /// Zero-based record index
        index: usize,

        /// Print the full award record as JSON instead of the abstract
        #[arg(long)]
        json: bool,

        /// Also print title, award id, directorate and program
        #[arg(long, conflicts_with = "json")]
        metadata: bool,
    },

    /// Print randomly chosen abstracts
    Sample {
        /// Number of abstracts to print
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,

        /// Seed for reproducible sampling (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the most frequent words across the corpus
    Words {
        /// Number of words to print
        #[arg(short = 't', long, default_value_t = DEFAULT_TOP_WORDS)]
        top: usize,
    },

    /// Count records per program element
    Programs,

    /// Count records per directorate
    Directorates,

    /// Show the effective configuration
    Config,
}
