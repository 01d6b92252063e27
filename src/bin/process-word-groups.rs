use clap::Parser;
use std::path::PathBuf;
use word_levels::leveling::process_file;
use word_levels::shared::{init_logging, report_missing_input};

/// Shuffle word groups and cut them into fixed-size game levels
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file of word groups
    #[arg(short, long, default_value = "word_groups.json")]
    input: PathBuf,

    /// JSON file to write the levels to
    #[arg(short, long, default_value = "game_levels.json")]
    output: PathBuf,

    /// Number of sub-words per level
    #[arg(short, long, default_value_t = 3)]
    chunk_size: usize,

    /// Seed for the shuffle, for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), word_levels::Error> {
    init_logging();
    let args = Args::parse();

    report_missing_input(
        process_file(&args.input, &args.output, args.chunk_size, args.seed).map(|count| {
            println!("Successfully processed and created {} game levels.", count);
            println!("Output saved to {}", args.output.display());
        }),
    )
}
