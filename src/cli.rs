use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::config::{GameSettings, PlayerConfig};
use crate::core::dictionary::FileWordList;
use crate::core::renderer::{Fanout, GameRenderer};
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::ghost::{ConsoleInput, GhostEvent, GhostGame, GhostRenderer, JsonTranscript, Player, PlayerKind};

#[derive(Parser, Debug)]
#[command(name = "ghost")]
#[command(about = "👻 The word game Ghost, for any number of players at one terminal")]
#[command(version)]
pub struct Cli {
    /// JSON settings file (gameplay constants, dictionary table, roster)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dictionary to play with (e.g. "scrabble" or "webster")
    #[arg(short, long)]
    pub dictionary: Option<String>,

    /// Word whose letters count a player's strikes
    #[arg(short, long)]
    pub ghost_word: Option<String>,

    /// Shortest word that counts as complete
    #[arg(short, long)]
    pub min_word_length: Option<usize>,

    /// Append every game event as a JSON line to this file
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Log game internals to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Defaults, then the settings file, then flags.
    pub fn settings(&self) -> Result<GameSettings> {
        let mut settings = match &self.config {
            Some(path) => GameSettings::from_file(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => GameSettings::default(),
        };

        if let Some(dictionary) = &self.dictionary {
            settings.dictionary = dictionary.clone();
        }
        if let Some(ghost_word) = &self.ghost_word {
            settings.ghost_word = ghost_word.clone();
        }
        if let Some(min_word_length) = self.min_word_length {
            settings.min_word_length = min_word_length;
        }

        settings.validate()?;
        Ok(settings)
    }
}

pub fn init_tracing(verbose: bool) {
    let default = if verbose { "ghost=debug" } else { "ghost=warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = cli.settings()?;
    tracing::debug!(?settings, "settings resolved");

    println!("---- Game Setup ----");
    if settings.players.is_empty() {
        settings.players = prompt_player_configs()?;
    }

    let provider = FileWordList::new(settings.dictionaries.clone());

    loop {
        println!();
        println!("===========================");
        println!("-*- STARTING A NEW GAME -*-");
        println!("===========================");

        let players = Player::from_configs(&settings.players, |_| Box::new(ConsoleInput::new()))?;
        let renderer = build_renderer(&cli)?;
        let mut game = GhostGame::new(players, &settings, &provider, renderer)
            .context("failed to set up the game")?;

        game.start()?;
        print_summary(&game)?;

        let again = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Start a new game?")
            .default(false)
            .interact()?;
        if !again {
            println!("Thanks for playing!");
            break;
        }
    }

    Ok(())
}

fn prompt_player_configs() -> Result<Vec<PlayerConfig>> {
    let theme = ColorfulTheme::default();
    let num_players: usize = Input::with_theme(&theme)
        .with_prompt("HOW MANY PLAYERS?")
        .validate_with(|n: &usize| if *n >= 1 { Ok(()) } else { Err("need at least one player") })
        .interact_text()?;

    let mut configs = Vec::with_capacity(num_players);
    for player_num in 1..=num_players {
        println!();
        println!("PLAYER {}:", player_num);

        let player_type: String = Input::with_theme(&theme)
            .with_prompt("PLAYER TYPE (default to 'human')")
            .allow_empty(true)
            .interact_text()?;
        let player_type = parse_player_type(&player_type)?;

        let name: String = Input::with_theme(&theme)
            .with_prompt("PLAYER NAME (default to generic name)")
            .allow_empty(true)
            .interact_text()?;
        let name = if name.trim().is_empty() { None } else { Some(name) };

        configs.push(PlayerConfig { player_type, name });
    }
    Ok(configs)
}

/// Empty answer means "use the default type".
fn parse_player_type(answer: &str) -> Result<Option<PlayerKind>> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    Ok(Some(answer.parse::<PlayerKind>()?))
}

fn build_renderer(cli: &Cli) -> Result<Box<dyn GameRenderer<GhostEvent>>> {
    let console: Box<dyn GameRenderer<GhostEvent>> = Box::new(GhostRenderer::stdout());
    let Some(path) = &cli.transcript else {
        return Ok(console);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open transcript {}", path.display()))?;
    let transcript: Box<dyn GameRenderer<GhostEvent>> = Box::new(JsonTranscript::new(file));
    let fanout: Box<dyn GameRenderer<GhostEvent>> = Box::new(Fanout::new(vec![console, transcript]));
    Ok(fanout)
}

fn print_summary(game: &GhostGame) -> Result<()> {
    let mut ctx = TerminalContext::stdout();
    ctx.print_colored_line("---- Final standings ----", TerminalColor::Cyan)?;
    if let Some(winner) = game.winner() {
        ctx.print_colored_line(&format!("1. {}", winner.name()), TerminalColor::Green)?;
    }
    let ghost_word = game.ghost_word();
    for (place, player) in game.eliminated_players().iter().rev().enumerate() {
        ctx.print_line(&format!("{}. {} ({})", place + 2, player.name(), ghost_word))?;
    }
    ctx.empty_line()?;
    ctx.flush()?;
    Ok(())
}
