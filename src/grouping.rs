use crate::error::Result;
use crate::shared::{new_hash_map, read_lines, word_len, write_json_pretty, HashMap};
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::path::Path;

/// A main word and every shorter word that can be spelled with its letters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub main_word: String,
    pub sub_words: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct GroupingOptions {
    /// Words shorter than this are ignored entirely
    pub min_word_len: usize,
    /// Shortest word that may be a main word
    pub min_main_len: usize,
    /// Groups with fewer sub-words are dropped
    pub min_sub_words: usize,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        GroupingOptions {
            min_word_len: 3,
            min_main_len: 5,
            min_sub_words: 3,
        }
    }
}

/// The letters of a word as a multiset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(HashMap<char, usize>);

impl LetterCounts {
    pub fn of(word: &str) -> Self {
        let mut counts = new_hash_map();
        word.chars().for_each(|ch| *counts.entry(ch).or_default() += 1);
        LetterCounts(counts)
    }

    pub fn count(&self, ch: char) -> usize {
        self.0.get(&ch).copied().unwrap_or(0)
    }

    /// Whether every letter of `other` is available here at least as many
    /// times as `other` uses it.
    pub fn contains(&self, other: &LetterCounts) -> bool {
        other
            .0
            .iter()
            .all(|(&ch, &needed)| self.count(ch) >= needed)
    }
}

pub fn can_form_word(word: &str, available: &LetterCounts) -> bool {
    available.contains(&LetterCounts::of(word))
}

struct Candidate<'a> {
    word: &'a str,
    len: usize,
    letters: LetterCounts,
}

/// Build every group whose main word has at least `min_sub_words` sub-words.
///
/// Sub-words keep the order of `words` within each length, and groups keep
/// the order their main words appear in `words` among equal sizes.
pub fn generate_word_groups<S: AsRef<str> + Sync>(
    words: &[S],
    options: &GroupingOptions,
) -> Vec<WordGroup> {
    let candidates: Vec<Candidate> = words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| word_len(w) >= options.min_word_len)
        .map(|word| Candidate {
            word,
            len: word_len(word),
            letters: LetterCounts::of(word),
        })
        .collect();

    let main_words: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| c.len >= options.min_main_len)
        .collect();
    debug!(
        "{} candidate words, {} possible main words",
        candidates.len(),
        main_words.len()
    );

    let groups: Vec<WordGroup> = main_words
        .par_iter()
        .filter_map(|main| {
            let sub_words: Vec<&Candidate> = candidates
                .iter()
                .filter(|c| c.len < main.len && main.letters.contains(&c.letters))
                .collect();

            if sub_words.len() < options.min_sub_words {
                return None;
            }
            Some(WordGroup {
                main_word: main.word.to_string(),
                sub_words: sub_words
                    .into_iter()
                    .sorted_by_key(|c| c.len)
                    .map(|c| c.word.to_string())
                    .collect(),
            })
        })
        .collect();

    groups
        .into_iter()
        .sorted_by_key(|g| Reverse(g.sub_words.len()))
        .collect()
}

/// Read a word list, keeping the trimmed words at least `min_word_len` long.
pub fn load_candidate_words<P: AsRef<Path>>(path: P, min_word_len: usize) -> Result<Vec<String>> {
    let lines: Vec<String> = read_lines(path)?;
    Ok(lines
        .iter()
        .map(|line| line.trim())
        .filter(|word| word_len(word) >= min_word_len)
        .map(|word| word.to_string())
        .collect())
}

/// Group the words in `input` and write the groups to `output` as JSON.
/// Returns the number of groups written.
pub fn group_file<P, Q>(input: P, output: Q, options: &GroupingOptions) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let words = load_candidate_words(&input, options.min_word_len)?;
    info!(
        "loaded {} words from {}",
        words.len(),
        input.as_ref().display()
    );
    let groups = generate_word_groups(&words, options);
    write_json_pretty(output, &groups)?;
    Ok(groups.len())
}
