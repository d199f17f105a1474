//! CLI argument parsing and structure definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::commands::{ConvertArgs, MergeArgs};
use crate::config::ConvertConfig;

/// NER training data converter - IOB and JSONL to a merged BILUO corpus
#[derive(Parser, Debug)]
#[command(name = "biluo")]
#[command(
    author,
    version,
    about = "NER training data converter - IOB and JSONL to a merged BILUO corpus",
    long_about = r#"
biluo - NER training data converter

INPUTS:
  • IOB files   - one `token<TAB>tag` per line, blank line between sentences
  • JSONL files - one `["raw text", ["O", "B-PERSON", ...]]` array per line

OUTPUT:
  A JSON array of sentence records with BILUO tags. Sentences whose tags
  are all `O` are dropped, and ids are renumbered from 0.

EXAMPLES:
  biluo data/all_data.txt data/bner.txt data/main.jsonl
  biluo data/all_data.txt data/bner.txt data/main.jsonl merged.json
  biluo iob data/all_data.txt -o iob.json
  biluo jsonl data/main.jsonl
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// First IOB file (shorthand for `biluo merge`)
    #[arg(value_name = "IOB_A")]
    pub iob_a: Option<PathBuf>,

    /// Second IOB file
    #[arg(value_name = "IOB_B")]
    pub iob_b: Option<PathBuf>,

    /// JSONL file
    #[arg(value_name = "JSONL")]
    pub jsonl: Option<PathBuf>,

    /// Output JSON file
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub options: CommonArgs,
}

impl Cli {
    /// Positional arguments as merge arguments, if all inputs were given.
    pub fn positional_merge(&self) -> Result<MergeArgs, String> {
        match (&self.iob_a, &self.iob_b, &self.jsonl) {
            (Some(iob_a), Some(iob_b), Some(jsonl)) => Ok(MergeArgs {
                iob_a: iob_a.clone(),
                iob_b: iob_b.clone(),
                jsonl: jsonl.clone(),
                output: self.output.clone(),
            }),
            (None, _, _) => Err("No input provided. Run `biluo --help` for usage.".to_string()),
            _ => Err("Expected three input files: <IOB_A> <IOB_B> <JSONL> [OUTPUT]".to_string()),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge two IOB files and one JSONL file into one corpus
    #[command(visible_alias = "m")]
    Merge(MergeArgs),

    /// Convert one IOB file to BILUO records
    Iob(ConvertArgs),

    /// Convert one JSONL file to records
    Jsonl(ConvertArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Read settings from a TOML file
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Replace tags outside the expected vocabulary with `O`
    #[arg(long, global = true)]
    pub coerce_unknown_tags: bool,

    /// Keep the original case (and accents) of JSONL tokens
    #[arg(long, global = true)]
    pub no_lowercase: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More log output (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Load the config file (if any) and apply flag overrides.
    pub fn load_config(&self) -> Result<ConvertConfig, String> {
        let mut config = match &self.config {
            Some(path) => ConvertConfig::from_file(path).map_err(|e| e.to_string())?,
            None => ConvertConfig::default(),
        };
        if self.coerce_unknown_tags {
            config.coerce_unknown_tags = true;
        }
        if self.no_lowercase {
            config.lowercase = false;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_merge() {
        let cli = Cli::parse_from(["biluo", "a.txt", "b.txt", "c.jsonl"]);
        assert!(cli.command.is_none());
        let args = cli.positional_merge().unwrap();
        assert_eq!(args.iob_a, PathBuf::from("a.txt"));
        assert_eq!(args.jsonl, PathBuf::from("c.jsonl"));
        assert!(args.output.is_none());
    }

    #[test]
    fn test_positional_merge_with_output() {
        let cli = Cli::parse_from(["biluo", "a.txt", "b.txt", "c.jsonl", "out.json", "-q"]);
        assert!(cli.options.quiet);
        let args = cli.positional_merge().unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_positional_merge_incomplete() {
        let cli = Cli::parse_from(["biluo", "a.txt", "b.txt"]);
        assert!(cli.positional_merge().is_err());
        let cli = Cli::parse_from(["biluo"]);
        assert!(cli.positional_merge().unwrap_err().contains("No input"));
    }

    #[test]
    fn test_subcommand() {
        let cli = Cli::parse_from(["biluo", "iob", "a.txt", "-o", "a.json", "--coerce-unknown-tags"]);
        match cli.command {
            Some(Commands::Iob(args)) => {
                assert_eq!(args.input, PathBuf::from("a.txt"));
                assert_eq!(args.output, Some(PathBuf::from("a.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.options.coerce_unknown_tags);
    }

    #[test]
    fn test_flags_override_config() {
        let options = CommonArgs {
            coerce_unknown_tags: true,
            no_lowercase: true,
            ..CommonArgs::default()
        };
        let config = options.load_config().unwrap();
        assert!(config.coerce_unknown_tags);
        assert!(!config.lowercase);
    }
}
