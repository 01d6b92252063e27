use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::hash::BuildHasherDefault;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

pub type HashMap<A, B> = std::collections::HashMap<A, B, BuildHasherDefault<rustc_hash::FxHasher>>;
pub type HashSet<A> = std::collections::HashSet<A, BuildHasherDefault<rustc_hash::FxHasher>>;

pub fn new_hash_map<A, B>() -> HashMap<A, B> {
    rustc_hash::FxHashMap::default()
}

pub fn init_logging() {
    env_logger::init();
}

/// Turn a missing input file into a logged error and a clean exit; every
/// other failure is passed through to `main`.
pub fn report_missing_input(result: Result<()>) -> Result<()> {
    match result {
        Err(e) if e.is_missing_input() => {
            error!("{}", e);
            Ok(())
        }
        other => other,
    }
}

/// Read a whole text file, decompressing it first if the name ends in `.gz`.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::reading(path, e))?;
    let contents = if path.extension().map_or(false, |ext| ext == "gz") {
        io::read_to_string(GzDecoder::new(file))
    } else {
        io::read_to_string(file)
    };
    contents.map_err(|e| Error::reading(path, e))
}

pub fn read_lines<P, C>(path: P) -> Result<C>
where
    P: AsRef<Path>,
    C: FromIterator<String>,
{
    Ok(read_text(path)?.lines().map(|s| s.to_string()).collect())
}

/// All regular files making up an input: the path itself, or every file
/// beneath it when it is a directory.
pub fn input_files<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let io_error = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop"));
            Error::reading(path, io_error)
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    debug!("found {} files under {}", files.len(), path.display());
    Ok(files)
}

pub fn read_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    serde_json::from_str(&read_text(path)?).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `contents`. The data goes to a temporary file next to
/// the destination first, so the destination is either fully rewritten or
/// left untouched.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| Error::writing(path, e))?;
    file.write_all(contents)
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| Error::writing(path, e))?;
    file.persist(path).map_err(|e| Error::writing(path, e.error))?;
    Ok(())
}

pub fn write_json_pretty<T, P>(path: P, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(path, json.as_bytes())
}

/// Number of characters in a word; lengths throughout are counted this way.
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| Error::writing(path, e))
}
