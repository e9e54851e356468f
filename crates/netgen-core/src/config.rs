//! Floor-level program tables and the lobby name pool.
//!
//! A floor table maps a 3d6 roll (3..=18 for the built-in content) to four
//! program names ordered by difficulty bucket. The table is externally
//! supplied data: the generator only indexes it, never mutates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of difficulty buckets per floor level.
pub const DIFFICULTY_BUCKETS: usize = 4;

/// One persisted floor-table record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FloorTableEntry {
    pub floor_level: u8,
    pub programs: [String; DIFFICULTY_BUCKETS],
}

/// Program names per floor level, indexed by roll then by bucket 0..=3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloorTable {
    levels: BTreeMap<u8, [String; DIFFICULTY_BUCKETS]>,
}

impl FloorTable {
    pub fn from_entries(entries: Vec<FloorTableEntry>) -> Self {
        Self {
            levels: entries.into_iter().map(|entry| (entry.floor_level, entry.programs)).collect(),
        }
    }

    pub fn to_entries(&self) -> Vec<FloorTableEntry> {
        self.levels
            .iter()
            .map(|(&floor_level, programs)| FloorTableEntry {
                floor_level,
                programs: programs.clone(),
            })
            .collect()
    }

    pub fn programs_for(&self, level: u8) -> Option<&[String; DIFFICULTY_BUCKETS]> {
        self.levels.get(&level)
    }

    pub fn min_level(&self) -> Option<u8> {
        self.levels.keys().next().copied()
    }

    pub fn max_level(&self) -> Option<u8> {
        self.levels.keys().next_back().copied()
    }
}

impl Default for FloorTable {
    fn default() -> Self {
        Self::from_entries(default_floor_entries())
    }
}

/// Built-in floor content, written out as `FloorConfig.json` on first run.
pub fn default_floor_entries() -> Vec<FloorTableEntry> {
    fn entry(floor_level: u8, programs: [&str; DIFFICULTY_BUCKETS]) -> FloorTableEntry {
        FloorTableEntry { floor_level, programs: programs.map(str::to_string) }
    }

    vec![
        entry(3, ["Hellhound", "Hellhound x2", "Kraken", "Hellhound x3"]),
        entry(4, ["Sabertooth", "Hellhound, Killer", "Hellhound, Scorpion", "Asp x2"]),
        entry(5, ["Raven x2", "Skunk x2", "Hellhound, Killer", "Hellhound, Liche"]),
        entry(6, ["Hellhound", "Sabertooth", "Raven x2", "Wisp x3"]),
        entry(7, ["Wisp", "Scorpion", "Sabertooth", "Hellhound, Sabertooth"]),
        entry(8, ["Raven", "Hellhound", "Hellhound", "Kraken"]),
        entry(9, ["Password DV6", "Password DV8", "Password DV10", "Password DV12"]),
        entry(10, ["File DV6", "File DV8", "File DV10", "File DV12"]),
        entry(11, ["Control Node DV6", "Control Node DV8", "Control Node DV10", "Control Node DV12"]),
        entry(12, ["Password DV6", "Password DV8", "Password DV10", "Password DV12"]),
        entry(13, ["Skunk", "Asp", "Killer", "Giant"]),
        entry(14, ["Asp", "Killer", "Liche", "Dragon"]),
        entry(15, ["Scorpion", "Liche", "Dragon", "Killer, Scorpion"]),
        entry(16, ["Killer, Skunk", "Asp", "Asp, Raven", "Kraken"]),
        entry(17, ["Wisp x3", "Raven x3", "Dragon, Wisp", "Raven, Wisp, Hellhound"]),
        entry(18, ["Liche", "Liche, Raven", "Giant", "Dragon x2"]),
    ]
}

/// Built-in lobby floor names, written out as `LobbyFloor.json` on first run.
pub fn default_lobby_pool() -> Vec<String> {
    ["File DV6", "Password DV6", "Password DV8", "Skunk", "Wisp", "Killer"]
        .map(str::to_string)
        .to_vec()
}
