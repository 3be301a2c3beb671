use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use sweeper_solver::{Sweeper, Version};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum VersionArg {
    Classic,
    Variant,
}

impl From<VersionArg> for Version {
    fn from(v: VersionArg) -> Version {
        match v {
            VersionArg::Classic => Version::Classic,
            VersionArg::Variant => Version::Variant,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Exact bomb-probability solver for a partially-revealed Minesweeper-family board."
)]
struct Cli {
    /// Path to a board snapshot: whitespace-separated tokens per row, `.`
    /// for a covered tile, anything else a revealed label ("0".."8", "B",
    /// or a variant colour name).
    #[arg(value_name = "MAP_FILE")]
    map_file: PathBuf,

    /// Total number of bombs on the board.
    #[arg(short, long)]
    bombs: u32,

    /// Which label alphabet the map file uses.
    #[arg(short, long, value_enum, default_value_t = VersionArg::Classic)]
    version: VersionArg,
}

fn parse_board(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.map_file)
        .with_context(|| format!("reading map file {}", cli.map_file.display()))?;
    let rows = parse_board(&text);
    anyhow::ensure!(!rows.is_empty(), "map file is empty");
    let height = rows.len();
    let width = rows[0].len();
    anyhow::ensure!(
        rows.iter().all(|row| row.len() == width),
        "every row must have the same number of tokens"
    );

    let mut sweeper = Sweeper::new(cli.version.into(), height, width, cli.bombs);
    for (row, tokens) in rows.iter().enumerate() {
        for (col, label) in tokens.iter().enumerate() {
            if label != "." {
                sweeper.integrate_new_info(row, col, label)?;
            }
        }
    }
    sweeper.calculate_board();

    for row in 0..height {
        let cells: Vec<&str> = (0..width)
            .map(|col| sweeper.board(row, col))
            .map(|label| if label.is_empty() { "." } else { label })
            .collect();
        println!("{}", cells.join("\t"));
    }
    if !sweeper.message().is_empty() {
        println!("\n{}", sweeper.message());
    }

    Ok(())
}
