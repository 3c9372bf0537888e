//! Clip dictionary loading
//!
//! Every audio file under a directory becomes one or more dictionary
//! phrases labelled with the file's path. A JSON name map renames clips
//! whose file names are not the phrase itself; a map value may also be an
//! array so that several phrases play the same clip.

use anyhow::{Context, Result};
use glob::{glob, Pattern};
use memetts_core::Dictionary;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::input::FileReader;

/// Clip extensions accepted when none are configured
pub const DEFAULT_SUFFIXES: &[&str] = &["wav", "mp3", "flac", "m4a"];

/// File name or stem to phrase(s)
pub type NameMap = Map<String, Value>;

/// Read a name map from a JSON object file
pub fn load_name_map(path: &Path) -> Result<NameMap> {
    let content = FileReader::read_text(path)?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse name map: {}", path.display()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(CliError::NameMapError(format!(
            "{} holds {}, expected a JSON object",
            path.display(),
            json_type_name(&other)
        ))
        .into()),
    }
}

/// Build a phrase dictionary from the clips under `dir`
pub fn load_dictionary(
    dir: &Path,
    name_map: &NameMap,
    suffixes: &[String],
) -> Result<Dictionary<String, PathBuf>> {
    if !dir.is_dir() {
        return Err(CliError::AudioDirNotFound(dir.display().to_string()).into());
    }

    let suffixes: Vec<String> = suffixes
        .iter()
        .map(|s| s.trim_start_matches('.').to_lowercase())
        .collect();

    let mut dictionary = Dictionary::new();
    for path in collect_clips(dir, &suffixes)? {
        for phrase in phrases_for(&path, name_map) {
            if let Some(previous) = dictionary.insert(phrase.clone(), path.clone()) {
                log::warn!(
                    "Phrase {:?} maps to both {} and {}; keeping the latter",
                    phrase,
                    previous.display(),
                    path.display()
                );
            }
        }
    }

    log::info!(
        "Loaded {} phrases from {}",
        dictionary.len(),
        dir.display()
    );
    Ok(dictionary)
}

/// Clip files under `dir` in path order
fn collect_clips(dir: &Path, suffixes: &[String]) -> Result<Vec<PathBuf>> {
    let root = Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{root}/**/*");
    let paths = glob(&pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

    let mut clips = Vec::new();
    for entry in paths {
        let path = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        if path.is_file() && has_suffix(&path, suffixes) {
            clips.push(path);
        }
    }
    clips.sort();
    Ok(clips)
}

fn has_suffix(path: &Path, suffixes: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| suffixes.contains(&ext))
}

/// Phrases a clip answers to: name map entry for the file name, then for the
/// stem, then the stem itself
fn phrases_for(path: &Path, name_map: &NameMap) -> Vec<String> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name_map.get(&file_name).or_else(|| name_map.get(&stem)) {
        Some(Value::Array(values)) => values.iter().map(value_to_phrase).collect(),
        Some(value) => vec![value_to_phrase(value)],
        None => vec![stem],
    }
}

fn value_to_phrase(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
