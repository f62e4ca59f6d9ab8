use std::{
    fs::File,
    io::{self, Write as _},
    path::Path,
};

use anyhow::Context;
use haig_core::MatchStyles;
use tempfile::NamedTempFile;

/// Write `value` as pretty JSON to `path`, or to stdout when no path is given
///
/// Files are written to a sibling temporary file first and then renamed over `path`. The
/// temporary file is removed if anything fails along the way.
pub fn write_json_file<T>(file_kind: &str, value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let mut json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {file_kind} JSON"))?;
    json.push('\n');

    let Some(path) = path else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(json.as_bytes())
            .and_then(|()| stdout.flush())
            .with_context(|| format!("Failed to write {file_kind} JSON to stdout"))?;
        return Ok(());
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).with_context(|| {
        format!(
            "Failed to create temporary {} file in {}",
            file_kind,
            dir.display()
        )
    })?;
    file.write_all(json.as_bytes())
        .and_then(|()| file.flush())
        .with_context(|| format!("Failed to write {} file: {}", file_kind, path.display()))?;
    file.persist(path).with_context(|| {
        format!(
            "Failed to replace {} file: {}",
            file_kind,
            path.display()
        )
    })?;
    Ok(())
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read the play-styles of all four teams from a match file
///
/// The file holds one play-style record per seat (`red1`, `red2`, `blue1`, `blue2`), each
/// with exactly the catalog feature keys.
pub fn read_match_file<P>(path: P) -> anyhow::Result<MatchStyles>
where
    P: AsRef<Path>,
{
    read_json_file("match", path)
}
