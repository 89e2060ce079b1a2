use anyhow::{Context, Result};
use clap::Parser;
use group_sum::core::expression::{fewest_operators, for_each_expression, for_each_solution};
use group_sum::utils::logger;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "expression-search")]
#[command(about = "Place +, - or nothing between digits read from stdin")]
struct Args {
    /// Only print expressions that evaluate to this value
    #[arg(short, long, allow_hyphen_values = true)]
    target: Option<i64>,

    /// With --target, print only the solution with the fewest operators
    #[arg(long, requires = "target")]
    fewest: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read digits from stdin")?;
    let digits = line.trim();
    tracing::debug!("Digits: {:?}, target: {:?}", digits, args.target);

    let mut out = io::stdout().lock();
    let mut written = 0usize;
    let mut emit = |expr: &str| -> group_sum::Result<()> {
        writeln!(out, "{}", expr)?;
        written += 1;
        Ok(())
    };

    match (args.target, args.fewest) {
        (Some(target), true) => {
            if let Some(expr) = fewest_operators(digits, target)? {
                emit(&expr)?;
            }
        }
        (Some(target), false) => for_each_solution(digits, target, &mut emit)?,
        (None, _) => for_each_expression(digits, &mut emit)?,
    }
    tracing::debug!("{} expressions written", written);

    out.flush().context("Failed to write to stdout")?;
    Ok(())
}
