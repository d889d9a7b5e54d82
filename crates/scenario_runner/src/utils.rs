//! Action-string parsing and choice display shared by the subcommands.

use anyhow::Result;

use fork_engine::moves::{MoveChoice, MoveId};
use fork_engine::species::SpeciesId;
use fork_engine::state::{PokemonIndex, PokemonMoveIndex, Side};

use crate::models::normalize;

/// Parse an action of the form `move:NAME`, `tera:NAME`, `switch:SPECIES`
/// or `pass`. A bare name is treated as a move.
pub fn parse_action(side: &Side, raw: &str) -> Result<MoveChoice> {
    let (kind, name) = match raw.split_once(':') {
        Some((kind, name)) => (kind, name),
        None if raw == "pass" => return Ok(MoveChoice::None),
        None => ("move", raw),
    };
    match kind {
        "move" => move_slot(side, name).map(MoveChoice::Move),
        "tera" => move_slot(side, name).map(MoveChoice::MoveTera),
        "switch" => reserve_slot(side, name).map(MoveChoice::Switch),
        other => anyhow::bail!("unknown action kind: {}", other),
    }
}

fn move_slot(side: &Side, name: &str) -> Result<PokemonMoveIndex> {
    let move_id = MoveId::from_str(&normalize(name))
        .ok_or_else(|| anyhow::anyhow!("unknown move: {}", name))?;
    for index in PokemonMoveIndex::ALL {
        if side.get_active().moves[index as usize].id == move_id {
            return Ok(index);
        }
    }
    anyhow::bail!(
        "{} does not know {}",
        side.get_active().id.data().name,
        name
    )
}

fn reserve_slot(side: &Side, name: &str) -> Result<PokemonIndex> {
    let species = SpeciesId::from_str(&normalize(name))
        .ok_or_else(|| anyhow::anyhow!("unknown species: {}", name))?;
    for index in PokemonIndex::ALL {
        if index != side.active_index
            && side.pokemon[index as usize].id == species
            && side.pokemon[index as usize].is_alive()
        {
            return Ok(index);
        }
    }
    anyhow::bail!("no alive reserve named {}", name)
}

/// Human-readable rendering of a choice against the side it belongs to.
pub fn describe_choice(side: &Side, choice: &MoveChoice) -> String {
    match choice {
        MoveChoice::Move(slot) => {
            format!(
                "move {}",
                side.get_active().moves[*slot as usize].id.data().name
            )
        }
        MoveChoice::MoveTera(slot) => format!(
            "tera + move {}",
            side.get_active().moves[*slot as usize].id.data().name
        ),
        MoveChoice::Switch(index) => {
            format!("switch {}", side.pokemon[*index as usize].id.data().name)
        }
        MoveChoice::None => "pass".to_string(),
    }
}
