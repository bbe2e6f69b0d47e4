use clap::Parser;
use day2::{parse_input, solve_puzzle_part1, solve_puzzle_part2, ParseMode};
use runner::{init_logging, read_input, InputArgs};

#[derive(Debug, Parser)]
#[command(about = "Follow a course of submarine commands")]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    /// Only accept command lines matching the exact grammar.
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.input.verbose);
    let mode = if cli.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let input = read_input(cli.input.input_or("input/day2.txt"))?;
    let commands = parse_input(&input, mode);
    let ignored = commands.iter().filter(|command| command.is_none()).count();
    tracing::info!(lines = commands.len(), ?mode, "parsed course");
    if ignored > 0 {
        tracing::debug!(ignored, "lines without a recognised command were skipped");
    }
    let part1 = solve_puzzle_part1(&commands);
    let part2 = solve_puzzle_part2(&commands);
    println!("{part1},{part2}");
    Ok(())
}
