use clap::Parser;
use day1::{parse_input, solve_puzzle_part1, solve_puzzle_part2};
use runner::{init_logging, read_input, InputArgs};

#[derive(Debug, Parser)]
#[command(about = "Count depth increases in a sonar sweep")]
struct Cli {
    #[command(flatten)]
    input: InputArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.input.verbose);
    let input = read_input(cli.input.input_or("input/day1.txt"))?;
    let depths = parse_input(&input)?;
    tracing::info!(measurements = depths.len(), "parsed sonar sweep");
    let part1 = solve_puzzle_part1(&depths);
    let part2 = solve_puzzle_part2(&depths);
    println!("{part1},{part2}");
    Ok(())
}
