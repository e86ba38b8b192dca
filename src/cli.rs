use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use crate::{
    dictionary::DEFAULT_DICTIONARY,
    ranking::{tags::{DEFAULT_TAGS, KNOWN_TAGS}, RankOptions, TagSet, DEFAULT_COUNT},
    session::OutputFormat,
};

/// Segment documents and list their most frequent words
#[derive(Debug, Parser)]
#[command(name = "magnifier", version, about)]
pub struct Cli {
    /// logger level (trace, debug, info, warn, error, off)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// analysis documents, reading comma separated file paths from stdin
    Analysis(AnalysisArgs),
}

#[derive(Debug, Clone, Args)]
pub struct AnalysisArgs {
    /// dictionary paths, comma separated
    #[arg(
        long,
        env = "MAGNIFIER_DICTIONARY",
        default_value = DEFAULT_DICTIONARY,
        value_delimiter = ','
    )]
    pub dictionary: Vec<String>,

    /// allowed part of speech flags, comma separated
    #[arg(long, default_value = DEFAULT_TAGS, long_help = flag_help())]
    pub flag: String,

    /// tokens with a lower dictionary frequency are ignored
    #[arg(long, default_value_t = 0)]
    pub min_frequency: u64,

    /// number of words to print
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// output format of each ranking
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn flag_help() -> String {
    format!("allowed part of speech flags, comma separated\navailable flags: {}", KNOWN_TAGS.join(","))
}

impl AnalysisArgs {
    pub fn rank_options(&self) -> RankOptions {
        RankOptions::new(TagSet::parse(&self.flag), self.min_frequency, self.count)
    }

    /// Dictionary sources with surrounding whitespace and empty items removed
    pub fn dictionaries(&self) -> Vec<String> {
        self.dictionary
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}
