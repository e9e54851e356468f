//! Weighted-random construction of a branching floor tree.
//!
//! The builder works level by level on a frontier of open floors. Each
//! frontier floor receives one child labelled by a 3d6 floor-level roll, and
//! may receive a second child on a 1d10 >= 9 branch check. A shared floor
//! budget drives termination; the final frontier donates one floor to carry
//! the suffix-marked terminal.

mod dice;

use std::error::Error;
use std::fmt;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::FloorTable;
use crate::tree::{FloorId, NetTree, ROOT_SUFFIX};

use dice::{pick_index, roll_dice, unit_interval};

/// Builder output consumed by the diagram layout engine.
#[derive(Clone, Debug)]
pub struct GeneratedNet {
    pub tree: NetTree,
    pub terminal: FloorId,
    /// Widest frontier observed while building; fixes the diagram width.
    pub max_floors_wide: usize,
    /// First char of every label in creation order, then `_` and the width.
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// `difficulty` outside `[0, 3]` would index past the last bucket.
    DifficultyOutOfRange { difficulty: f64 },
    /// A 3d6 roll has no entry in the floor table.
    MissingFloorLevel { roll: u8 },
    /// No lobby names to draw the two entry floors from.
    EmptyLobbyPool,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DifficultyOutOfRange { difficulty } => {
                write!(f, "difficulty {difficulty} is outside the supported range 0-3")
            }
            Self::MissingFloorLevel { roll } => {
                write!(f, "rolled floor level {roll} has no entry in the floor table")
            }
            Self::EmptyLobbyPool => write!(f, "lobby floor pool is empty"),
        }
    }
}

impl Error for GenerateError {}

pub struct NetGenerator {
    difficulty: f64,
    target_floor_count: u32,
}

impl NetGenerator {
    pub fn new(difficulty: f64, target_floor_count: u32) -> Self {
        Self { difficulty, target_floor_count }
    }

    pub fn generate(
        &self,
        rng: &mut ChaCha8Rng,
        floors: &FloorTable,
        lobby: &[String],
    ) -> Result<GeneratedNet, GenerateError> {
        if !(0.0..=3.0).contains(&self.difficulty) {
            return Err(GenerateError::DifficultyOutOfRange { difficulty: self.difficulty });
        }
        if lobby.is_empty() {
            return Err(GenerateError::EmptyLobbyPool);
        }

        // Signed so the frontier quirk below can overdraw without wrapping.
        let mut budget = i64::from(self.target_floor_count);
        let mut initials = String::new();

        // Fixed two-floor lobby prefix, present regardless of the target.
        let root_label = lobby[pick_index(rng, lobby.len())].clone();
        push_initial(&mut initials, &root_label);
        let mut tree = NetTree::with_root(root_label);
        budget -= 1;

        let entry_label = lobby[pick_index(rng, lobby.len())].clone();
        push_initial(&mut initials, &entry_label);
        let entry = tree.attach_child(tree.root(), entry_label);
        budget -= 1;

        let mut frontier = vec![entry];
        let mut max_floors_wide = 1_usize;

        // The budget is only checked between levels and before branch rolls:
        // once a level starts, every frontier floor still gets its first
        // child, and a branch early in the level can spend the budget deeper
        // levels would have used. Accepted quirk of the generation rules.
        while budget > 1 {
            let mut next_frontier = Vec::with_capacity(frontier.len() * 2);
            for &floor in &frontier {
                let label = self.roll_program(rng, floors)?;
                push_initial(&mut initials, &label);
                next_frontier.push(tree.attach_child(floor, label));
                budget -= 1;

                if budget > 1 && roll_dice(rng, 1, 10) >= 9 {
                    let label = self.roll_program(rng, floors)?;
                    push_initial(&mut initials, &label);
                    next_frontier.push(tree.attach_child(floor, label));
                    budget -= 1;
                }
            }
            frontier = next_frontier;
            max_floors_wide = max_floors_wide.max(frontier.len());
        }

        // One floor of the final frontier carries the terminal.
        let holder = frontier[pick_index(rng, frontier.len())];
        let label = format!("{}{ROOT_SUFFIX}", self.roll_program(rng, floors)?);
        push_initial(&mut initials, &label);
        let terminal = tree.attach_child(holder, label);

        let signature = format!("{initials}_{max_floors_wide}");
        Ok(GeneratedNet { tree, terminal, max_floors_wide, signature })
    }

    fn roll_program(
        &self,
        rng: &mut ChaCha8Rng,
        floors: &FloorTable,
    ) -> Result<String, GenerateError> {
        let roll = roll_dice(rng, 3, 6) as u8;
        let programs =
            floors.programs_for(roll).ok_or(GenerateError::MissingFloorLevel { roll })?;
        Ok(programs[bucket_index(self.difficulty, rng)].clone())
    }
}

/// Seed a fresh ChaCha stream and run one generation pass.
pub fn generate_net(
    seed: u64,
    difficulty: f64,
    target_floor_count: u32,
    floors: &FloorTable,
    lobby: &[String],
) -> Result<GeneratedNet, GenerateError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    NetGenerator::new(difficulty, target_floor_count).generate(&mut rng, floors, lobby)
}

/// Blended bucket selection: difficulty 1.5 lands on bucket 1 or 2 with
/// even odds. Stays inside 0..=3 because difficulty is validated to `[0, 3]`
/// and the unit draw is strictly below 1.
fn bucket_index(difficulty: f64, rng: &mut ChaCha8Rng) -> usize {
    (difficulty + unit_interval(rng)).floor() as usize
}

fn push_initial(initials: &mut String, label: &str) {
    if let Some(first) = label.chars().next() {
        initials.push(first);
    }
}
