use clap::Parser;
use std::path::PathBuf;
use word_levels::cleaning::clean_word_list;
use word_levels::shared::{init_logging, report_missing_input};

/// Lowercase, dedupe and sort a word list, keeping only alphabetic words
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Newline-separated word list, a .gz of one, or a directory of them
    #[arg(short, long, default_value = "shona_words.txt")]
    input: PathBuf,

    /// Where to write the cleaned list (defaults to rewriting the input;
    /// required when the input is a directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), word_levels::Error> {
    init_logging();
    let args = Args::parse();
    let output = args.output.unwrap_or_else(|| args.input.clone());

    report_missing_input(clean_word_list(&args.input, &output).map(|count| {
        println!(
            "Successfully cleaned, sorted, and wrote {} unique words to {}",
            count,
            output.display()
        )
    }))
}
