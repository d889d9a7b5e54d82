//! fork_engine - deterministic branching battle turn resolver
//!
//! Given a battle state and both sides' chosen actions, the engine produces
//! every way the turn can resolve as probability-weighted instruction
//! lists. Applying a list advances the state in place and reversing it
//! restores the original exactly, so a search can walk the outcome tree
//! without cloning positions.

/// Type definitions and type chart
pub mod types;

/// Species data and combatant construction
pub mod species;

/// Battle state and its addressable pieces
pub mod state;

/// Atomic state deltas and weighted outcome branches
pub mod instruction;

/// Ability identifiers, flags and hooks
pub mod abilities;

/// Item identifiers, flags and hooks
pub mod items;

/// Move data, flags and action choices
pub mod moves;

/// Damage formula and its modifier stack
pub mod damage;

/// Priority and speed ordering
pub mod turn_order;

/// Legal action enumeration
pub mod options;

/// End-of-turn residual phase
pub mod end_of_turn;

/// Branching turn resolution
pub mod generate;

// Re-export commonly used types
pub use abilities::AbilityId;
pub use damage::DamageRolls;
pub use generate::generate_instructions_from_move_pair;
pub use instruction::{Instruction, StateInstructions};
pub use items::ItemId;
pub use moves::{MoveChoice, MoveId};
pub use species::{PokemonSpec, SpeciesId};
pub use state::{Pokemon, Side, SideReference, State};
pub use types::PokemonType;
