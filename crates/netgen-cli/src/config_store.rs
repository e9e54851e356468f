//! `FloorConfig.json` / `LobbyFloor.json` bootstrap.
//!
//! Existing files are loaded as-is; missing files are seeded with the
//! built-in defaults so the next run can be edited by hand.

use std::fs;
use std::io;
use std::path::Path;

use netgen_core::{FloorTable, FloorTableEntry, default_floor_entries, default_lobby_pool};

pub const FLOOR_CONFIG_FILE: &str = "FloorConfig.json";
pub const LOBBY_CONFIG_FILE: &str = "LobbyFloor.json";

#[derive(Debug)]
pub struct LoadedConfig {
    pub floor_table: FloorTable,
    pub lobby_pool: Vec<String>,
}

pub fn load_or_seed(dir: &Path) -> io::Result<LoadedConfig> {
    let floor_path = dir.join(FLOOR_CONFIG_FILE);
    let entries: Vec<FloorTableEntry> = if floor_path.exists() {
        read_json(&floor_path)?
    } else {
        let defaults = default_floor_entries();
        write_pretty(&floor_path, &defaults)?;
        defaults
    };

    let lobby_path = dir.join(LOBBY_CONFIG_FILE);
    let lobby_pool: Vec<String> = if lobby_path.exists() {
        read_json(&lobby_path)?
    } else {
        let defaults = default_lobby_pool();
        write_pretty(&lobby_path, &defaults)?;
        defaults
    };

    Ok(LoadedConfig { floor_table: FloorTable::from_entries(entries), lobby_pool })
}

/// A floor count from the command line obeys the same table-derived bound as
/// the interactive prompt; anything outside it would undershoot the builder's
/// lobby-plus-terminal minimum or overshoot the configured levels.
pub fn check_floor_count(floors: u32, min_level: u8, max_level: u8) -> Result<(), String> {
    if (u32::from(min_level)..=u32::from(max_level)).contains(&floors) {
        Ok(())
    } else {
        Err(format!("floor count {floors} must be between {min_level} - {max_level}"))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<T> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_pretty<T: serde::Serialize>(path: &Path, value: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(path, json)
}
