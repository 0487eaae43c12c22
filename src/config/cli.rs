use crate::core::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-kata")]
#[command(about = "Run small coding-exercise katas")]
pub struct CliConfig {
    /// Path to a TOML file with kata inputs
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format, overrides the config file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: KataCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum KataCommand {
    /// Reverse every word of a sentence
    ReverseWords {
        /// Sentence to reverse, defaults to the configured one
        sentence: Option<String>,
    },
    /// Compare two strings by character counts
    Anagram {
        #[arg(requires = "right")]
        left: Option<String>,
        right: Option<String>,
    },
    /// Find the largest decimal digit of a number
    LargestDigit {
        #[arg(allow_negative_numbers = true)]
        number: Option<i32>,
    },
    /// Carry multiples of ten forward through a sequence
    Propagate {
        /// Comma-separated integers
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Run all four katas with the configured inputs
    All,
}
