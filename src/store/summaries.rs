use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::errors::PipelineError;

pub fn reset_dir(dir: &Path) -> Result<(), PipelineError> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

pub fn summary_path(dir: &Path, call_id: &str) -> Option<PathBuf> {
    let unsafe_id = call_id.is_empty()
        || call_id.contains(['/', '\\'])
        || call_id == "."
        || call_id.contains("..");
    if unsafe_id {
        return None;
    }
    Some(dir.join(format!("{call_id}.json")))
}

pub fn latest_summary_file(dir: &Path) -> Result<PathBuf, PipelineError> {
    if !dir.is_dir() {
        return Err(PipelineError::data(dir, "summary directory not found"));
    }

    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified()?;
        if latest.as_ref().map_or(true, |(newest, _)| modified > *newest) {
            latest = Some((modified, path));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or_else(|| PipelineError::data(dir, "no summary files found"))
}
