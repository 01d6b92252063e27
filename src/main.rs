use clap::Parser;
use log::info;
use std::path::PathBuf;
use word_levels::shared::{ensure_dir, init_logging, report_missing_input};
use word_levels::{cleaning, filtering, grouping, leveling, Result};

/// Build game levels from a raw word list: clean it, group it, optionally
/// drop long words, and cut the groups into levels
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw word list, a .gz of one, or a directory of them
    #[arg(short, long)]
    input: PathBuf,

    /// Directory to write the intermediate and final files to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Also drop words longer than this before making levels
    #[arg(short, long)]
    max_len: Option<usize>,

    /// Number of sub-words per level
    #[arg(short, long, default_value_t = 3)]
    chunk_size: usize,

    /// Seed for the shuffle, for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Minimum length of a main word
    #[arg(long, default_value_t = 5)]
    min_main_len: usize,

    /// Minimum number of sub-words for a group to be kept
    #[arg(long, default_value_t = 3)]
    min_sub_words: usize,
}

fn run(args: &Args) -> Result<()> {
    ensure_dir(&args.out_dir)?;
    let words = args.out_dir.join("words.txt");
    let groups = args.out_dir.join("word_groups.json");
    let levels = args.out_dir.join("game_levels.json");

    let count = cleaning::clean_word_list(&args.input, &words)?;
    println!("Cleaned {} unique words into {}", count, words.display());

    let options = grouping::GroupingOptions {
        min_main_len: args.min_main_len,
        min_sub_words: args.min_sub_words,
        ..Default::default()
    };
    let count = grouping::group_file(&words, &groups, &options)?;
    println!("Generated {} word groups into {}", count, groups.display());

    let level_source = match args.max_len {
        Some(max_len) => {
            let filtered = args.out_dir.join("word_groups_filtered.json");
            let outcome = filtering::filter_file(&groups, &filtered, max_len)?;
            println!(
                "Filtered {} groups with long words into {}",
                outcome.groups_removed,
                filtered.display()
            );
            filtered
        }
        None => groups,
    };

    let count = leveling::process_file(&level_source, &levels, args.chunk_size, args.seed)?;
    println!("Created {} game levels in {}", count, levels.display());
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    info!("building levels from {}", args.input.display());
    report_missing_input(run(&args))
}
