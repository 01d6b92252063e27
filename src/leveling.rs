use crate::error::{Error, Result};
use crate::filtering::GroupRecord;
use crate::grouping::WordGroup;
use crate::shared::{read_json, write_json_pretty};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// `[main_word, sub1, ..., subN]`
pub type GameLevel = Vec<String>;

/// Shuffle each group's sub-words and cut them into levels of `chunk_size`
/// sub-words each. Leftover sub-words that don't fill a level are dropped.
pub fn build_levels<R>(
    groups: Vec<WordGroup>,
    chunk_size: usize,
    rng: &mut R,
) -> Result<Vec<GameLevel>>
where
    R: Rng + ?Sized,
{
    if chunk_size == 0 {
        return Err(Error::InvalidOption("chunk size must be at least 1".into()));
    }

    let mut levels = Vec::new();
    for WordGroup {
        main_word,
        mut sub_words,
    } in groups
    {
        sub_words.shuffle(rng);
        let full_chunks = sub_words.chunks_exact(chunk_size);
        debug!(
            "{}: {} levels, {} sub-words left over",
            main_word,
            full_chunks.len(),
            full_chunks.remainder().len()
        );
        levels.extend(full_chunks.map(|chunk| {
            let mut level = Vec::with_capacity(chunk_size + 1);
            level.push(main_word.clone());
            level.extend_from_slice(chunk);
            level
        }));
    }
    Ok(levels)
}

/// Turn the groups in `input` into levels written to `output`. Flat records,
/// as left by the length filter, are read main word first. With a `seed` the
/// shuffle is reproducible.
pub fn process_file<P, Q>(
    input: P,
    output: Q,
    chunk_size: usize,
    seed: Option<u64>,
) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let records: Vec<GroupRecord> = read_json(&input)?;
    let groups: Vec<WordGroup> = records
        .into_iter()
        .filter_map(GroupRecord::into_group)
        .collect();
    info!(
        "loaded {} groups from {}",
        groups.len(),
        input.as_ref().display()
    );

    let levels = match seed {
        Some(seed) => build_levels(groups, chunk_size, &mut StdRng::seed_from_u64(seed))?,
        None => build_levels(groups, chunk_size, &mut rand::thread_rng())?,
    };
    write_json_pretty(output, &levels)?;
    Ok(levels.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn group(main: &str, subs: &[&str]) -> WordGroup {
        WordGroup {
            main_word: main.to_string(),
            sub_words: subs.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn test_levels_have_main_word_and_full_chunks() {
        let groups = vec![
            group("mwana", &["na", "wa", "ma", "an", "man"]),
            group("sadza", &["sad", "ada", "zas", "das", "aza", "sa", "za"]),
            group("baba", &["ab", "ba"]),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let levels = build_levels(groups.clone(), 3, &mut rng).unwrap();

        // 5 -> 1 level, 7 -> 2 levels, 2 -> none
        assert_eq!(levels.len(), 3);
        assert!(levels.iter().all(|l| l.len() == 4));
        assert_eq!(levels[0][0], "mwana");
        assert_eq!(levels[1][0], "sadza");
        assert_eq!(levels[2][0], "sadza");

        for level in &levels {
            let source = groups.iter().find(|g| g.main_word == level[0]).unwrap();
            assert!(level[1..].iter().all(|w| source.sub_words.contains(w)));
        }
        // a sub-word is never used twice within a group
        let sadza: Vec<&String> = levels[1..].iter().flat_map(|l| &l[1..]).collect();
        assert_eq!(sadza.iter().unique().count(), 6);
    }

    #[test]
    fn test_same_seed_same_levels() {
        let groups = vec![group("mwana", &["na", "wa", "ma", "an", "man", "nam"])];
        let first = build_levels(groups.clone(), 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = build_levels(groups, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let subs = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
        let levels =
            build_levels(vec![group("main", &subs)], 3, &mut StdRng::seed_from_u64(1)).unwrap();
        let used: Vec<&str> = levels
            .iter()
            .flat_map(|l| l[1..].iter().map(|s| s.as_str()))
            .sorted()
            .collect();
        assert_eq!(used, subs);
    }

    #[test]
    fn test_chunk_size_is_configurable() {
        let groups = vec![group("mwana", &["na", "wa", "ma", "an", "man"])];
        let levels = build_levels(groups.clone(), 2, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(levels.len(), 2);
        assert!(levels.iter().all(|l| l.len() == 3));

        assert!(matches!(
            build_levels(groups, 0, &mut StdRng::seed_from_u64(3)),
            Err(Error::InvalidOption(_))
        ));
    }

    #[test]
    fn test_process_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("word_groups.json");
        let output = dir.path().join("game_levels.json");
        std::fs::write(
            &input,
            r#"[{"main_word": "mwana", "sub_words": ["na", "wa", "ma", "an"]}]"#,
        )
        .unwrap();

        assert_eq!(process_file(&input, &output, 3, Some(9)).unwrap(), 1);
        let levels: Vec<GameLevel> = read_json(&output).unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0][0], "mwana");
        assert_eq!(levels[0].len(), 4);
    }

    #[test]
    fn test_process_file_reads_flat_records() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("filtered.json");
        let output = dir.path().join("game_levels.json");
        std::fs::write(&input, r#"[["sadza", "sad", "ada", "zas"], []]"#).unwrap();

        assert_eq!(process_file(&input, &output, 3, None).unwrap(), 1);
        let levels: Vec<GameLevel> = read_json(&output).unwrap();
        assert_eq!(levels[0][0], "sadza");
        assert_eq!(
            levels[0][1..].iter().sorted().collect_vec(),
            vec!["ada", "sad", "zas"]
        );
    }
}
