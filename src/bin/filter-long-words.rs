use clap::Parser;
use std::path::PathBuf;
use word_levels::filtering::filter_file;
use word_levels::shared::{init_logging, report_missing_input};

/// Remove long words from word groups, dropping groups left empty
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file of groups, as objects or flat arrays
    #[arg(short, long, default_value = "word_groups.json")]
    input: PathBuf,

    /// JSON file to write the filtered groups to
    #[arg(short, long, default_value = "word_groups_filtered.json")]
    output: PathBuf,

    /// Longest word to keep
    #[arg(short, long, default_value_t = 7)]
    max_len: usize,
}

fn main() -> Result<(), word_levels::Error> {
    init_logging();
    let args = Args::parse();

    report_missing_input(filter_file(&args.input, &args.output, args.max_len).map(|outcome| {
        println!(
            "Filtered {} groups with long words.",
            outcome.groups_removed
        );
        println!("Saved filtered data to {}", args.output.display());
    }))
}
