use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use fork_engine::state::{Side, SideReference};
use fork_engine::MoveChoice;

use crate::utils::describe_choice;

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Position file: a team spec or a serialized state
    pub position: PathBuf,

    /// Emit the options as JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: OptionsArgs) -> Result<()> {
    let state = super::load_position(&args.position)?;
    let (side_one_options, side_two_options) = state.get_all_options();

    if args.json {
        let rendered = serde_json::to_string_pretty(&(&side_one_options, &side_two_options))
            .context("failed to serialize options")?;
        println!("{}", rendered);
        return Ok(());
    }

    print_side(SideReference::SideOne, &state.side_one, &side_one_options);
    println!();
    print_side(SideReference::SideTwo, &state.side_two, &side_two_options);
    Ok(())
}

fn print_side(side_ref: SideReference, side: &Side, options: &[MoveChoice]) {
    println!(
        "{:?} ({}): {} option(s)",
        side_ref,
        side.get_active().id.data().name,
        options.len()
    );
    for option in options {
        println!("  {}", describe_choice(side, option));
    }
}
