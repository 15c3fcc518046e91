use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::errors::PipelineError;

pub fn append_jsonl<T: Serialize>(path: &Path, value: &T) -> Result<(), PipelineError> {
    let mut line = serde_json::to_string(value).map_err(io::Error::from)?;
    line.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    // One write per line keeps concurrent appenders from interleaving mid-line.
    file.write_all(line.as_bytes())?;

    Ok(())
}
