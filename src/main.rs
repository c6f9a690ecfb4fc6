use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use scramble::{
    app::{App, AppAction},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging::{init_logging, LogConfig},
    plain,
    runtime::{CrosstermEventSource, FixedTicker, GameEventSource, Runner, Ticker},
    Dictionary, SessionEngine, WordListDictionary,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;

/// spell as many words as you can from a random root word
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A word scramble game: every round picks a random root word, and you score one point per letter for each real word you can spell from its letters."
)]
pub struct Cli {
    /// language tag passed to the dictionary
    #[clap(short = 'l', long)]
    language: Option<String>,

    /// bundled dictionary to check words against
    #[clap(long)]
    dictionary: Option<String>,

    /// dictionary file (one word per line, or json)
    #[clap(long)]
    dictionary_path: Option<PathBuf>,

    /// bundled list of root words
    #[clap(long)]
    root_words: Option<String>,

    /// root word file (one word per line, or json)
    #[clap(long)]
    root_words_path: Option<PathBuf>,

    /// seed for picking root words, for repeatable games
    #[clap(long)]
    seed: Option<u64>,

    /// play over stdin/stdout, one word per line, without the terminal ui
    #[clap(long)]
    plain: bool,

    /// persist the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,

    /// log file (defaults to the state directory when -v is given)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// more logging (-v debug, -vv trace)
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Stored config with command line overrides applied on top.
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(dictionary) = &self.dictionary {
            config.dictionary = dictionary.clone();
            config.dictionary_path = None;
        }
        if let Some(path) = &self.dictionary_path {
            config.dictionary_path = Some(path.clone());
        }
        if let Some(root_words) = &self.root_words {
            config.root_words = root_words.clone();
            config.root_words_path = None;
        }
        if let Some(path) = &self.root_words_path {
            config.root_words_path = Some(path.clone());
        }
        config
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    init_logging(
        &LogConfig::from_verbosity(cli.verbose, cli.log_file.clone()),
        AppDirs::log_path(),
    )?;

    if !cli.plain && !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty (use --plain for pipes)")
            .exit();
    }

    let store = FileConfigStore::new();
    let config = cli.apply_to(store.load());

    let root_words = config.root_word_list()?.words;
    let dictionary = WordListDictionary::from(config.dictionary_list()?);
    if cli.save_config {
        store.save(&config)?;
    }
    let mut rng = cli.rng();
    let mut engine = SessionEngine::new(&root_words, dictionary, &config.language, &mut rng)?;

    if cli.plain {
        plain::run(
            &mut engine,
            &root_words,
            &mut rng,
            stdin().lock(),
            io::stdout().lock(),
        )?;
        return Ok(());
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine, root_words, rng);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!("final score: {}", app.engine.current_state().score);
    Ok(())
}

fn start_tui<B, D, E, T>(
    terminal: &mut Terminal<B>,
    app: &mut App<D>,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>>
where
    B: Backend,
    D: Dictionary,
    E: GameEventSource,
    T: Ticker,
{
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        if app.handle_event(runner.step()) == AppAction::Quit {
            break;
        }
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    Ok(())
}
