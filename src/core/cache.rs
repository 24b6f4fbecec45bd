//! Cache file output for the offline NBA export.
//!
//! The export is a single JSON document replaced wholesale on every run;
//! nothing in the serving path reads it back.

use serde::Serialize;
use std::{
    fs,
    io::Write,
    path::Path,
};

use crate::Result;

/// Default file name for the NBA cache export.
pub const DEFAULT_CACHE_FILE: &str = "players_cache.json";

/// Write a string to file, creating parent directories as needed.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Serialize `value` as compact JSON and replace whatever is at `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    write_string(path, &json)?;
    Ok(())
}
