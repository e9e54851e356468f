//! Interactive shell around the net generator: config bootstrap, bounded
//! stdin prompts, seed derivation, and the text artifact sink.

pub mod config_store;
pub mod export;
pub mod prompt;
pub mod seed;
