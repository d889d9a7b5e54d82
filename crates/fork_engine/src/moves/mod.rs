//! Move data, hooks and action choices.
//!
//! `data` holds the static move table; `hooks`/`registry` extend it with
//! conditional damage logic the table cannot express.

pub mod data;
pub mod hooks;
pub mod implementations;
pub mod registry;

pub use data::{
    Move, MoveCategory, MoveFlags, MoveId, MoveTarget, Secondary, SecondaryEffect, StatChanges,
    StatusEffect, VolatileEffect, MOVES,
};
pub use hooks::MoveHooks;
pub use registry::MOVE_REGISTRY;

use serde::{Deserialize, Serialize};

use crate::state::{PokemonIndex, PokemonMoveIndex};

/// One side's chosen action for the turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveChoice {
    /// Use the move in the given slot
    Move(PokemonMoveIndex),
    /// Use the move in the given slot and terastallize first
    MoveTera(PokemonMoveIndex),
    /// Switch to the reserve in the given slot
    Switch(PokemonIndex),
    /// No action (forced pass, e.g. only the opponent must replace a faint)
    #[default]
    None,
}

impl MoveChoice {
    /// The move slot this choice uses, if it is a move action.
    #[inline]
    pub fn move_index(&self) -> Option<PokemonMoveIndex> {
        match self {
            MoveChoice::Move(m) | MoveChoice::MoveTera(m) => Some(*m),
            _ => None,
        }
    }

    #[inline]
    pub fn is_switch(&self) -> bool {
        matches!(self, MoveChoice::Switch(_))
    }

    #[inline]
    pub fn is_tera(&self) -> bool {
        matches!(self, MoveChoice::MoveTera(_))
    }
}
