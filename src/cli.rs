use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::checker::{EquationError, check_equation};
use crate::puzzle::{DEFAULT_SEARCH_BUDGET, Puzzle, generate_solvable};
use crate::utils::uses_exact_multiset;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Equata - an interactive arithmetic equation puzzle
#[derive(Parser, Debug)]
#[command(name = "equata")]
#[command(about = "Place +, -, *, / between generated numbers to build a valid equation")]
#[command(version)]
pub struct CliArgs {
    /// How many numbers to generate per round
    #[arg(short, long, default_value_t = 4)]
    pub count: usize,

    /// Minimum generated number
    #[arg(long, default_value_t = 1)]
    pub min: i64,

    /// Maximum generated number
    #[arg(long, default_value_t = 10)]
    pub max: i64,

    /// Attempts per round before the answer is offered
    #[arg(short, long, default_value_t = 3)]
    pub attempts: u32,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn print_rules() {
    println!("Welcome to the equation puzzle!");
    println!("You will be given a set of numbers. Place the operators");
    println!("'+', '-', '*', '/' between them (parentheses are allowed)");
    println!("and '==' once, so that both sides are equal.");
    println!("Example: given 3, 1, 2 and 2 you could answer '3 + 1 == 2 + 2'.");
    println!();
}

fn read_line(prompt: &str, lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;
    match lines.next() {
        Some(line) => Ok(line.context("Failed to read from stdin")?.trim().to_string()),
        None => anyhow::bail!("Input stream closed"),
    }
}

fn describe_failure(err: &EquationError) -> String {
    match err {
        EquationError::MalformedEquation(found) => {
            format!("Use '==' exactly once (found {}).", found)
        }
        EquationError::Syntax(e) => format!("That is not a valid equation: {}.", e),
        EquationError::Eval(e) => format!("Evaluation failed: {}.", e),
    }
}

fn play_round(
    puzzle: &Puzzle,
    attempts: u32,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    println!("Generated numbers: {:?}", puzzle.numbers);
    println!();

    for _ in 0..attempts {
        let answer = read_line("Enter your equation: ", lines)?;

        if !uses_exact_multiset(&answer, &puzzle.numbers) {
            println!("You must use all the generated numbers, each exactly once.");
            continue;
        }

        match check_equation(&answer) {
            Ok(true) => {
                println!("Congratulations, the equation is correct!");
                return Ok(());
            }
            Ok(false) => println!("The two sides are not equal. Please try again."),
            Err(err) => println!("{} Please try again.", describe_failure(&err)),
        }
    }

    let show_hint = read_line("Would you like the answer? (yes/no): ", lines)?;
    if show_hint.eq_ignore_ascii_case("yes")
        && let Some(solution) = puzzle.solutions.first()
    {
        println!("A correct equation is: {}", solution);
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    let mut rng = rand::rng();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_rules();

    loop {
        let puzzle = generate_solvable(
            &mut rng,
            args.count,
            args.min,
            args.max,
            DEFAULT_SEARCH_BUDGET,
        )
        .context("Failed to generate a solvable puzzle")?;
        info!(
            "Round started with {:?} ({} known solutions)",
            puzzle.numbers,
            puzzle.solutions.len()
        );

        play_round(&puzzle, args.attempts, &mut lines)?;

        let again = read_line("\nDo you want to play again? (yes/no): ", &mut lines)?;
        if !again.eq_ignore_ascii_case("yes") {
            return Ok(());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_describe_malformed_equation() {
        let message = describe_failure(&EquationError::MalformedEquation(0));
        assert!(message.contains("'=='"));
    }

    #[test]
    fn test_play_round_accepts_correct_answer() {
        let puzzle = Puzzle {
            numbers: vec![3.0, 1.0, 2.0, 2.0],
            solutions: vec!["3 + 1 == 2 + 2".to_string()],
        };
        let mut lines = vec![Ok("3 + 1 == 2 + 2".to_string())].into_iter();
        assert!(play_round(&puzzle, 3, &mut lines).is_ok());
    }

    #[test]
    fn test_play_round_offers_answer_after_attempts() {
        let puzzle = Puzzle {
            numbers: vec![3.0, 1.0, 2.0, 2.0],
            solutions: vec!["3 + 1 == 2 + 2".to_string()],
        };
        let wrong = "3 - 1 == 2 * 2".to_string();
        let mut lines = vec![
            Ok(wrong.clone()),
            Ok(wrong.clone()),
            Ok(wrong),
            Ok("yes".to_string()),
        ]
        .into_iter();
        assert!(play_round(&puzzle, 3, &mut lines).is_ok());
    }
}
