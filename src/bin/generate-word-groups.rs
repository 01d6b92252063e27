use clap::Parser;
use std::path::PathBuf;
use word_levels::grouping::{group_file, GroupingOptions};
use word_levels::shared::{init_logging, report_missing_input};

/// Group words under longer words whose letters can spell them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cleaned, newline-separated word list
    #[arg(short, long, default_value = "shona_words.txt")]
    input: PathBuf,

    /// JSON file to write the groups to
    #[arg(short, long, default_value = "word_groups.json")]
    output: PathBuf,

    /// Words shorter than this are not used at all
    #[arg(long, default_value_t = 3)]
    min_word_len: usize,

    /// Minimum length of a main word
    #[arg(long, default_value_t = 5)]
    min_main_len: usize,

    /// Minimum number of sub-words for a group to be kept
    #[arg(long, default_value_t = 3)]
    min_sub_words: usize,
}

fn main() -> Result<(), word_levels::Error> {
    init_logging();
    let args = Args::parse();
    let options = GroupingOptions {
        min_word_len: args.min_word_len,
        min_main_len: args.min_main_len,
        min_sub_words: args.min_sub_words,
    };

    report_missing_input(group_file(&args.input, &args.output, &options).map(|count| {
        println!(
            "Successfully generated {} word groups and saved to {}",
            count,
            args.output.display()
        )
    }))
}
