//! Merge command - two IOB files and one JSONL file into one corpus

use std::path::PathBuf;

use clap::Parser;

use super::super::output::{color, log_info};
use super::super::parser::CommonArgs;
use crate::merge::CorpusMerger;

/// Merge two IOB files and one JSONL file into one corpus
#[derive(Parser, Debug, Clone)]
pub struct MergeArgs {
    /// First IOB file
    #[arg(value_name = "IOB_A")]
    pub iob_a: PathBuf,

    /// Second IOB file
    #[arg(value_name = "IOB_B")]
    pub iob_b: PathBuf,

    /// JSONL file
    #[arg(value_name = "JSONL")]
    pub jsonl: PathBuf,

    /// Output JSON file [default: data/all_entity_merged_THREE_data.json]
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

pub fn run(args: MergeArgs, options: &CommonArgs) -> Result<(), String> {
    let config = options.load_config()?;
    let output = args.output.unwrap_or_else(|| config.output_path());

    let summary = CorpusMerger::from_config(&config)
        .merge(&args.iob_a, &args.iob_b, &args.jsonl, &output)
        .map_err(|e| e.to_string())?;

    for (path, stats) in &summary.sources {
        let mut line = format!(
            "  {}: {} kept of {} sentences",
            path.display(),
            stats.kept,
            stats.sentences
        );
        if stats.mismatched > 0 {
            line.push_str(&format!(", {} skipped (token/label mismatch)", stats.mismatched));
        }
        log_info(&line, options.quiet);
    }
    log_info(
        &format!(
            "{} Merged file saved at: {}",
            color("32", "✓"),
            summary.output.display()
        ),
        options.quiet,
    );
    log_info(&format!("Total data samples: {}", summary.total), options.quiet);
    Ok(())
}
