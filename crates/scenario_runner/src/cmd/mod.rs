pub mod options;
pub mod run;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fork_engine::State;

use crate::models::PositionFile;

/// Read and build a position from either accepted layout.
fn load_position(path: &Path) -> Result<State> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file: PositionFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    file.into_state()
        .with_context(|| format!("invalid position in {}", path.display()))
}
