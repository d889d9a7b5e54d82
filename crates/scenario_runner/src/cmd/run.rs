use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use fork_engine::{generate_instructions_from_move_pair, DamageRolls};

use crate::utils::{describe_choice, parse_action};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Position file: a team spec or a serialized state
    pub position: PathBuf,

    /// Side one's action: move:NAME, tera:NAME, switch:SPECIES or pass
    #[arg(long = "one")]
    pub side_one: String,

    /// Side two's action
    #[arg(long = "two")]
    pub side_two: String,

    /// Damage roll policy: average or minmaxaverage
    #[arg(long, default_value = "average")]
    pub rolls: String,

    /// Emit the branch set as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let mut state = super::load_position(&args.position)?;

    let choice_one = parse_action(&state.side_one, &args.side_one).context("side one action")?;
    let choice_two = parse_action(&state.side_two, &args.side_two).context("side two action")?;
    let rolls = match args.rolls.as_str() {
        "average" => DamageRolls::Average,
        "minmaxaverage" => DamageRolls::MinMaxAverage,
        other => anyhow::bail!("unknown roll policy: {}", other),
    };

    let described_one = describe_choice(&state.side_one, &choice_one);
    let described_two = describe_choice(&state.side_two, &choice_two);

    let branches =
        generate_instructions_from_move_pair(&mut state, &choice_one, &choice_two, rolls);

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&branches).context("failed to serialize branches")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{} vs {}", described_one, described_two);
    let total: f32 = branches.iter().map(|branch| branch.probability).sum();
    println!(
        "{} branch(es), probability mass {:.6}",
        branches.len(),
        total
    );

    for (i, branch) in branches.iter().enumerate() {
        let marker = if branch.halted { "  [halted]" } else { "" };
        println!();
        println!("#{}  p={:.4}{}", i + 1, branch.probability, marker);
        if branch.instruction_list.is_empty() {
            println!("    (nothing happens)");
        }
        for instruction in &branch.instruction_list {
            println!("    {:?}", instruction);
        }
    }
    Ok(())
}
