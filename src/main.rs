//! # Wayfarer Main Entry Point
//!
//! Parses command-line arguments, sets up logging, builds the starting world,
//! and runs the read-eval loop until the player quits.

use clap::Parser;
use log::{error, info, LevelFilter};
use std::io::{self, BufRead};
use wayfarer::{
    config, content, get_save_info, list_saves, load_game, parse_command, save_game,
    ActionOutcome, Command, ConsoleRenderer, GameState, ParseError, WayfarerResult,
};

/// Command line arguments for Wayfarer.
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(about = "A turn-based text adventure")]
#[command(version)]
struct Args {
    /// Player character name
    #[arg(short, long, default_value = "Adventurer")]
    name: String,

    /// Default save file used by 'save' and 'load' without an argument
    #[arg(long, default_value = config::DEFAULT_SAVE_FILE)]
    save_file: String,

    /// Resume from the save file instead of starting a new game
    #[arg(long)]
    resume: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("starting wayfarer v{}", wayfarer::VERSION);
    if let Err(err) = run(&args) {
        error!("fatal error: {}", err);
        eprintln!("The session ended unexpectedly: {}", err);
        std::process::exit(1);
    }
}

fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Builds the session and runs the command loop to completion.
fn run(args: &Args) -> WayfarerResult<()> {
    let renderer = ConsoleRenderer::new();
    let mut game = if args.resume {
        load_game(&args.save_file)?
    } else {
        content::new_game(&args.name)
    };

    renderer.welcome();
    renderer.events(&game.enter_current_scene()?);
    renderer.scene(&game.look_around()?);

    let stdin = io::stdin();
    loop {
        renderer.prompt();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: treat like quit
            renderer.goodbye();
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                renderer.error(&err.to_string());
                continue;
            }
        };

        if dispatch(command, &mut game, &renderer, args)? {
            break;
        }
    }
    Ok(())
}

/// Executes one command against the session. Returns `true` to quit.
fn dispatch(
    command: Command,
    game: &mut GameState,
    renderer: &ConsoleRenderer,
    args: &Args,
) -> WayfarerResult<bool> {
    match command {
        Command::Move(direction) => {
            let outcome = game.navigate(direction.as_str())?;
            let moved = outcome.is_success();
            render_outcome(renderer, outcome);
            if moved {
                renderer.scene(&game.look_around()?);
                show_encounter(game, renderer)?;
            }
        }

        Command::Look => renderer.scene(&game.look_around()?),
        Command::Inventory => renderer.info(&game.player.inventory_summary()),
        Command::Status => renderer.status(&game.player.status_summary()),

        Command::Pick { item } => render_outcome(renderer, game.pick_up(&item)?),
        Command::Drop { item } => render_outcome(renderer, game.drop_item(&item)?),
        Command::Use { item } => render_outcome(renderer, game.use_item(&item)?),
        Command::Equip { item, slot } => render_outcome(renderer, game.equip(&item, &slot)),
        Command::Unequip { slot } => render_outcome(renderer, game.unequip(&slot)),

        Command::Save { file } => {
            let path = file.as_deref().unwrap_or(&args.save_file);
            match save_game(game, path) {
                Ok(()) => renderer.success(&format!("Game saved to {}.", path)),
                Err(err) => renderer.error(&format!("Could not save: {}", err)),
            }
        }

        Command::Load { file } => {
            let path = file.as_deref().unwrap_or(&args.save_file);
            // Reconstruct a whole new session, then swap it in; a failed
            // load leaves the running game untouched.
            match load_game(path) {
                Ok(loaded) => {
                    *game = loaded;
                    renderer.success(&format!("Game loaded from {}.", path));
                    renderer.scene(&game.look_around()?);
                }
                Err(err) => {
                    renderer.error(&format!("Could not load: {}", err));
                    report_available_saves(renderer);
                }
            }
        }

        Command::Help => renderer.help(),
        Command::Quit => {
            renderer.goodbye();
            return Ok(true);
        }
    }
    Ok(false)
}

fn render_outcome(renderer: &ConsoleRenderer, outcome: ActionOutcome) {
    match outcome {
        ActionOutcome::Success(lines) => {
            for line in &lines {
                renderer.success(line);
            }
        }
        ActionOutcome::Failure(err) => renderer.error(&err.to_string()),
    }
}

/// Shows the opponent and player status when standing in an active
/// encounter. Combat resolution itself is out of scope; this is the gate
/// the outer combat commands would hang off.
fn show_encounter(game: &GameState, renderer: &ConsoleRenderer) -> WayfarerResult<()> {
    if let Some(summary) = game.encounter_summary()? {
        renderer.combat(&summary);
        renderer.status(&game.player.status_summary());
    }
    Ok(())
}

fn report_available_saves(renderer: &ConsoleRenderer) {
    match list_saves(".") {
        Ok(saves) if !saves.is_empty() => {
            let names: Vec<String> = saves
                .iter()
                .map(|path| match get_save_info(path) {
                    Ok(info) => format!(
                        "{} ({}, level {})",
                        path.display(),
                        info.player_name,
                        info.player_level
                    ),
                    // Not every .json here has to be a readable save.
                    Err(_) => path.display().to_string(),
                })
                .collect();
            renderer.info(&format!("Available saves: {}", names.join(", ")));
        }
        Ok(_) => renderer.info("No save files found here."),
        Err(err) => renderer.error(&format!("Could not list saves: {}", err)),
    }
}
