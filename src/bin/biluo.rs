//! biluo - NER training data converter
//!
//! Converts IOB token/tag files and JSONL `[text, labels]` files into
//! BILUO sentence records and merges them into one JSON corpus.
//!
//! # Usage
//!
//! ```bash
//! # Merge two IOB files and one JSONL file
//! biluo data/all_data.txt data/bner.txt data/main.jsonl
//!
//! # Same, with an explicit output path
//! biluo data/all_data.txt data/bner.txt data/main.jsonl merged.json
//!
//! # Convert a single file to stdout
//! biluo iob data/all_data.txt
//! biluo jsonl data/main.jsonl -o jsonl.json
//! ```

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use biluo::cli::commands::convert::{self, SourceFormat};
use biluo::cli::commands::merge;
use biluo::cli::output::{color, init_logging};
use biluo::cli::parser::{Cli, Commands};

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_logging(cli.options.verbose, cli.options.quiet);

    let options = &cli.options;
    let result: Result<(), String> = match cli.command.take() {
        Some(Commands::Merge(args)) => merge::run(args, options),
        Some(Commands::Iob(args)) => convert::run(args, SourceFormat::Iob, options),
        Some(Commands::Jsonl(args)) => convert::run(args, SourceFormat::Jsonl, options),
        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "biluo", &mut io::stdout());
            Ok(())
        }
        // No subcommand: positional args are the merge inputs
        None => cli
            .positional_merge()
            .and_then(|args| merge::run(args, options)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
