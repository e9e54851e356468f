//! Deterministic core for NET run generation: a weighted-random floor tree
//! builder and the ASCII diagram layout engine that renders it.

pub mod config;
pub mod diagram;
pub mod netgen;
pub mod tree;

pub use config::{FloorTable, FloorTableEntry, default_floor_entries, default_lobby_pool};
pub use diagram::{DiagramStyle, LayoutError, render, render_text};
pub use netgen::{GenerateError, GeneratedNet, NetGenerator, generate_net};
pub use tree::{FloorId, FloorNode, NetTree, ROOT_SUFFIX};
