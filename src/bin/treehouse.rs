use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use treehouse::{
    compute_scenic_scores, compute_scenic_scores_parallel, compute_visibility, Forest, Survey,
};

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Part1,
    Part2,
    Both,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    verbose: bool,
    /// Score trees across all cores
    #[clap(short, long)]
    parallel: bool,
    #[clap(short, long, value_enum, default_value = "both")]
    mode: Mode,
    /// Puzzle input; read from stdin if omitted
    input: Option<PathBuf>,
}

fn load_forest(input: &str) -> anyhow::Result<Forest> {
    let forest = input.parse::<Forest>().context("unable to parse forest")?;
    log::debug!("heights:\n{}", forest.render_heights());
    Ok(forest)
}

fn part1(input: &str) -> anyhow::Result<usize> {
    let mut forest = load_forest(input)?;
    let start = std::time::Instant::now();
    let visible = compute_visibility(&mut forest);
    log::debug!("visibility:\n{}", forest.render_visibility());
    log::info!("visibility pass took {:?}", start.elapsed());
    Ok(visible)
}

fn part2(input: &str, parallel: bool) -> anyhow::Result<usize> {
    let mut forest = load_forest(input)?;
    let start = std::time::Instant::now();
    let best = if parallel {
        compute_scenic_scores_parallel(&mut forest)
    } else {
        compute_scenic_scores(&mut forest)
    };
    log::info!("scenic pass took {:?}", start.elapsed());
    Ok(best)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("unable to read {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    match args.mode {
        Mode::Part1 => println!("{}", part1(&input)?),
        Mode::Part2 => println!("{}", part2(&input, args.parallel)?),
        Mode::Both => {
            let mut forest = load_forest(&input)?;
            let survey = Survey::of(&mut forest, args.parallel);
            log::debug!("visibility:\n{}", forest.render_visibility());
            println!("{}", survey.visible);
            println!("{}", survey.best_scenic_score);
        }
    }
    Ok(())
}
