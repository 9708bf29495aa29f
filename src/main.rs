use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use doku::{Generator, Grid, Puzzle, DEFAULT_ERASE_COUNT};
use std::{fs, path::PathBuf, process};

#[derive(Parser, Debug)]
#[command(name = "doku", version, about = "Classic 9x9 Sudoku solver and puzzle generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a puzzle read from a file or stdin
    Solve {
        /// Path to a puzzle file (81 cells with 0 or . for blanks). If omitted, reads from stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Generate a puzzle by erasing cells from a full solution
    Generate {
        /// Number of erase draws (draws may repeat, so fewer cells can end up blank)
        #[arg(long, default_value_t = DEFAULT_ERASE_COUNT)]
        erase: usize,

        /// Seed the random source for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn read_puzzle(input: &Option<PathBuf>) -> Result<String> {
    let s = match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let filtered: String = s.chars().filter(|ch| matches!(ch, '0'..='9'|'.'|'_')).collect();
    if filtered.len() < 81 { bail!("expected at least 81 digits/dots in input (have {})", filtered.len()) }
    Ok(filtered.chars().take(81).collect())
}

fn print_puzzle(p: &Puzzle) {
    for r in 0..9 {
        if r % 3 == 0 { println!("+-------+-------+-------+"); }
        for c in 0..9 {
            if c % 3 == 0 { print!("| "); }
            let d = p.grid.get(r, c);
            if p.is_given(r, c) {
                print!("{} ", d.to_string().bold());
            } else {
                print!("· ");
            }
        }
        println!("|");
    }
    println!("+-------+-------+-------+");
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { input } => {
            let puzzle = read_puzzle(&input)?;
            let mut grid = Grid::parse(&puzzle).context("parse puzzle")?;
            match doku::solve(&mut grid) {
                Ok(()) => println!("\nSolved grid:\n{}", grid.to_pretty_string()),
                Err(e) => {
                    eprintln!("{} {}", "error:".red().bold(), e);
                    process::exit(1);
                }
            }
        }
        Command::Generate { erase, seed } => {
            let mut gen = Generator::new(seed);
            let puzzle = gen.generate(erase);
            print_puzzle(&puzzle);
            println!("\nCompact: {}", puzzle.grid.to_compact());
        }
    }
    Ok(())
}
