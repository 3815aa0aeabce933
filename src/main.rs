use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;

use star_match::logger;
use star_match::terminal::{self, Command};
use star_match::{Game, GameConfig, StarMatchError};

/// Star Match: pick numbers that add up to the stars before time runs out.
#[derive(Parser, Debug)]
#[command(name = "star-match", version, about)]
struct Cli {
    /// TOML file with game settings. Flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible star draws.
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds on the clock per game.
    #[arg(long)]
    seconds: Option<u32>,

    /// Debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(seconds) = self.seconds {
            config = config.with_starting_seconds(seconds);
        }
        config.validate()?;
        Ok(config)
    }
}

fn draw(game: &Game) {
    println!("\n{}\n{}", terminal::render(&game.view()), terminal::PROMPT);
}

async fn play(config: GameConfig) -> anyhow::Result<()> {
    let mut game = Game::new(config)?;
    let changed = game.change_notifier();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    draw(&game);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match Command::parse(&line) {
                    Command::Toggle(value) => match game.toggle_number(value) {
                        Ok(_) => {}
                        Err(StarMatchError::InvalidNumber(value)) => {
                            println!("{} is not a number on the pad.", value);
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    },
                    Command::NewGame => {
                        game.start_new_game();
                    }
                    Command::Quit => break,
                    Command::Unknown(input) => {
                        tracing::warn!(%input, "unknown command");
                        println!("{}", terminal::PROMPT);
                        continue;
                    }
                }
                draw(&game);
            }
            _ = changed.notified() => {
                draw(&game);
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let config = cli.game_config()?;
    tracing::debug!(?config, "starting star-match");

    LocalSet::new().run_until(play(config)).await
}
