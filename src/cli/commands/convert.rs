//! Iob/Jsonl commands - convert a single source file

use std::path::PathBuf;

use clap::Parser;

use super::super::output::{color, log_info, write_output};
use super::super::parser::CommonArgs;
use crate::merge::corpus_to_string;

/// Convert one source file to records
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write JSON to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Source format of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Tab-separated IOB lines
    Iob,
    /// JSONL `[text, labels]` pairs
    Jsonl,
}

pub fn run(args: ConvertArgs, format: SourceFormat, options: &CommonArgs) -> Result<(), String> {
    let config = options.load_config()?;

    let conversion = match format {
        SourceFormat::Iob => config.iob_converter().convert_file(&args.input),
        SourceFormat::Jsonl => config.jsonl_converter().convert_file(&args.input),
    }
    .map_err(|e| e.to_string())?;

    let mut json = corpus_to_string(&conversion.records).map_err(|e| e.to_string())?;
    json.push('\n');
    write_output(&json, args.output.as_deref())?;

    let stats = conversion.stats;
    let mut summary = format!(
        "{} {}: {} kept of {} sentences",
        color("32", "✓"),
        args.input.display(),
        stats.kept,
        stats.sentences
    );
    if stats.mismatched > 0 {
        summary.push_str(&format!(", {} skipped (token/label mismatch)", stats.mismatched));
    }
    if let Some(path) = &args.output {
        summary.push_str(&format!(" -> {}", path.display()));
    }
    log_info(&summary, options.quiet);
    Ok(())
}
