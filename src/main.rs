use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tactical_patcher::{run, SUCCESS_MESSAGE, TARGET_FILE};

/// Rewrites TacticalPlanner.cs for the Vec2 -> Vec3 API change.
///
/// Takes no arguments: the target path and the replacement rules are
/// compiled in.
#[derive(Parser)]
#[command(name = "tactical-patcher")]
#[command(about = "Fix Vec2 to Vec3 conversions in TacticalPlanner.cs", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let Cli {} = Cli::parse();

    let _report = run().with_context(|| format!("could not patch {}", TARGET_FILE))?;

    // Exactly one line on stdout; colored drops the escape codes off-tty.
    println!("{}", SUCCESS_MESSAGE.green());

    Ok(())
}
