use crate::error::Result;
use crate::grouping::WordGroup;
use crate::shared::{read_json, word_len, write_json_pretty};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of a groups file: either a flat `[main, sub, ...]` array or a
/// `{"main_word", "sub_words"}` object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum GroupRecord {
    Flat(Vec<String>),
    Group(WordGroup),
}

impl GroupRecord {
    pub fn word_count(&self) -> usize {
        match self {
            GroupRecord::Flat(words) => words.len(),
            GroupRecord::Group(group) => group.sub_words.len() + 1,
        }
    }

    /// The record as a group, reading a flat record as main word first.
    pub fn into_group(self) -> Option<WordGroup> {
        match self {
            GroupRecord::Flat(mut words) => {
                if words.is_empty() {
                    return None;
                }
                let main_word = words.remove(0);
                Some(WordGroup {
                    main_word,
                    sub_words: words,
                })
            }
            GroupRecord::Group(group) => Some(group),
        }
    }

    /// Drop every word longer than `max_len`, or `None` if nothing survives.
    /// A group whose main word goes keeps its surviving sub-words as a flat
    /// record.
    fn without_long_words(self, max_len: usize) -> Option<GroupRecord> {
        let short = |word: &String| word_len(word) <= max_len;
        match self {
            GroupRecord::Flat(words) => {
                let kept: Vec<String> = words.into_iter().filter(short).collect();
                (!kept.is_empty()).then_some(GroupRecord::Flat(kept))
            }
            GroupRecord::Group(WordGroup {
                main_word,
                sub_words,
            }) => {
                let sub_words: Vec<String> = sub_words.into_iter().filter(short).collect();
                if short(&main_word) {
                    Some(GroupRecord::Group(WordGroup {
                        main_word,
                        sub_words,
                    }))
                } else {
                    (!sub_words.is_empty()).then_some(GroupRecord::Flat(sub_words))
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub records: Vec<GroupRecord>,
    pub groups_removed: usize,
}

pub fn filter_long_words(records: Vec<GroupRecord>, max_len: usize) -> FilterOutcome {
    let total = records.len();
    let records: Vec<GroupRecord> = records
        .into_iter()
        .filter_map(|record| record.without_long_words(max_len))
        .collect();
    FilterOutcome {
        groups_removed: total - records.len(),
        records,
    }
}

/// Filter the groups in `input` and write the survivors to `output`.
pub fn filter_file<P, Q>(input: P, output: Q, max_len: usize) -> Result<FilterOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let records: Vec<GroupRecord> = read_json(&input)?;
    info!(
        "loaded {} groups from {}",
        records.len(),
        input.as_ref().display()
    );
    let words_before: usize = records.iter().map(GroupRecord::word_count).sum();

    let outcome = filter_long_words(records, max_len);
    let words_after: usize = outcome.records.iter().map(GroupRecord::word_count).sum();
    debug!(
        "removed {} words longer than {}",
        words_before - words_after,
        max_len
    );

    write_json_pretty(output, &outcome.records)?;
    Ok(outcome)
}
