use crate::error::{Error, Result};
use crate::shared::{input_files, read_lines, write_atomic, HashSet};
use itertools::Itertools;
use log::{debug, info};
use std::path::Path;

/// Lowercase, keep purely alphabetic entries, dedupe and sort.
pub fn clean_words<I>(lines: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let words: HashSet<String> = lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
        .collect();
    words.into_iter().sorted().collect()
}

/// Clean the word list at `input` (a file, or a directory of files) and
/// write it to `output`, which may be the same file. Returns the number of
/// unique words written. A directory can't be written back to, so `output`
/// must name a file.
pub fn clean_word_list<P, Q>(input: P, output: Q) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    if output.as_ref().is_dir() {
        return Err(Error::InvalidOption(format!(
            "output {} is a directory; give a file to write the cleaned list to",
            output.as_ref().display()
        )));
    }

    let mut lines = Vec::new();
    for file in input_files(&input)? {
        let before = lines.len();
        lines.extend(read_lines::<_, Vec<String>>(&file)?);
        debug!("read {} lines from {}", lines.len() - before, file.display());
    }
    info!(
        "read {} raw entries from {}",
        lines.len(),
        input.as_ref().display()
    );

    let words = clean_words(&lines);
    let mut contents = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());
    words.iter().for_each(|word| {
        contents.push_str(word);
        contents.push('\n');
    });
    write_atomic(output, contents.as_bytes())?;
    Ok(words.len())
}
