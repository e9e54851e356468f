//! Text artifact sink for rendered diagrams.
//!
//! Rasterizing the text to an image is left to external tooling; the
//! persisted artifact is the diagram itself, named after the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `netrun_<difficulty>_<floors>_<signature>.txt`.
pub fn artifact_name(difficulty: f64, floors: u32, signature: &str) -> String {
    format!("netrun_{difficulty}_{floors}_{signature}.txt")
}

pub fn write_diagram(
    dir: &Path,
    difficulty: f64,
    floors: u32,
    signature: &str,
    text: &str,
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(artifact_name(difficulty, floors, signature));
    fs::write(&path, text)?;
    Ok(path)
}
