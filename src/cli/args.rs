//! Command line argument parsing for the hunstem CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DICTIONARY_DIR_ENV;

/// hunstem - Hungarian stemming and text normalization
#[derive(Parser, Debug, Clone)]
#[command(name = "hunstem")]
#[command(about = "Hungarian stemming and text normalization backed by hunspell dictionaries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HunstemArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Directory holding the affix and dictionary files
    #[arg(short = 'd', long, env = DICTIONARY_DIR_ENV, global = true)]
    pub dict_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HunstemArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the candidate stems and the chosen stem of each word
    Stem(StemArgs),

    /// Check whether the analyzer recognizes each word
    Check(CheckArgs),

    /// Run text through the Hungarian pipeline
    Analyze(AnalyzeArgs),

    /// Show the pipelines installed by the Hungarian locale
    Pipeline(PipelineArgs),
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Use the search-time pipeline
    #[arg(long)]
    pub query: bool,

    /// Use a legacy builder (plain text tokens, no search pipeline)
    #[arg(long)]
    pub legacy: bool,
}

/// Arguments for showing pipelines
#[derive(Parser, Debug, Clone)]
pub struct PipelineArgs {
    /// Use a legacy builder
    #[arg(long)]
    pub legacy: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_command() {
        let args =
            HunstemArgs::try_parse_from(["hunstem", "stem", "kutyák", "házak", "-d", "/dict"])
                .unwrap();

        assert_eq!(args.dict_dir, Some(PathBuf::from("/dict")));
        if let Command::Stem(stem_args) = args.command {
            assert_eq!(stem_args.words, vec!["kutyák", "házak"]);
        } else {
            panic!("Expected Stem command");
        }
    }

    #[test]
    fn test_stem_requires_words() {
        assert!(HunstemArgs::try_parse_from(["hunstem", "stem"]).is_err());
    }

    #[test]
    fn test_analyze_command() {
        let args = HunstemArgs::try_parse_from([
            "hunstem",
            "--format",
            "json",
            "--pretty",
            "analyze",
            "A kutyák ugatnak",
            "--query",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.text, "A kutyák ugatnak");
            assert!(analyze_args.query);
            assert!(!analyze_args.legacy);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_verbosity() {
        let args = HunstemArgs::try_parse_from(["hunstem", "pipeline"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = HunstemArgs::try_parse_from(["hunstem", "-vv", "pipeline"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = HunstemArgs::try_parse_from(["hunstem", "-q", "-v", "pipeline"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
