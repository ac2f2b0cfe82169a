use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use repodescribe::model::{DEFAULT_ABBREV_LENGTH, DEFAULT_DIRTY_MARKER, DEFAULT_PREFIX};
use repodescribe::DescribeConfig;

#[derive(Parser, Debug)]
#[command(name = "repodescribe", about = "Describe a commit relative to its nearest tag")]
pub struct Cli {
    /// Revision to describe
    #[arg(default_value = "HEAD")]
    pub reference: String,

    /// Path to the git repository
    #[arg(short = 'C', long = "repo", default_value = ".")]
    pub repo_path: PathBuf,

    /// Fall back to the abbreviated commit id when no tag is reachable
    #[arg(long)]
    pub always: bool,

    /// Suffix appended when tracked files have local modifications
    #[arg(
        long = "dirty",
        value_name = "MARKER",
        default_value = DEFAULT_DIRTY_MARKER,
        allow_hyphen_values = true
    )]
    pub dirty_marker: String,

    /// Only consider tags matching this glob
    #[arg(long = "match", value_name = "GLOB")]
    pub match_pattern: Option<String>,

    /// Ignore tags matching this glob (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude_patterns: Vec<String>,

    /// Minimum abbreviated id length, 0 for the full id
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_ABBREV_LENGTH,
        allow_negative_numbers = true
    )]
    pub abbrev: i32,

    /// Also consider lightweight tags
    #[arg(long)]
    pub tags: bool,

    /// Always print the long form, even on a tagged commit
    #[arg(long)]
    pub long: bool,

    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Describe)]
    pub format: OutputFormat,

    /// Key prefix for properties and JSON output
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Log each phase to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The descriptor string only
    Describe,
    /// `key=value` lines
    Properties,
    /// A JSON object
    Json,
}

impl Cli {
    pub fn describe_config(&self) -> DescribeConfig {
        DescribeConfig {
            always: self.always,
            dirty_marker: self.dirty_marker.clone(),
            match_pattern: self.match_pattern.clone(),
            exclude_patterns: self.exclude_patterns.clone(),
            abbrev_length: self.abbrev,
            include_lightweight_tags: self.tags,
            force_long_format: self.long,
        }
    }
}
