use crate::timestamp::TimeStamp;
use anyhow::{anyhow, Result};
use std::fs::File;
use std::path::Path;

pub fn open(path: &Path, kind: &str) -> Result<File> {
    match File::open(path) {
        Err(e) => Err(anyhow!("Opening {} file `{}`: {}", kind, path.display(), e)),
        Ok(file) => Ok(file),
    }
}

/// Returns the output file name for a post: `{stamp_size}-{slug}.html`.
pub fn make_file_name(title: &str, timestamp: &TimeStamp) -> String {
    let slug = slug::slugify(title);
    format!(
        "{}-{}.html",
        timestamp.stamp_size(),
        if slug.is_empty() { "untitled" } else { slug.as_str() }
    )
}
