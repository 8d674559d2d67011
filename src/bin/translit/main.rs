mod lexicon_store;

use clap::{Parser, Subcommand, ValueEnum};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use lexicon_store::{load_lexicon, save_lexicon};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use translit_core::{Config, Direction, Lexicon, Transliterator};

#[derive(Parser)]
#[command(name = "translit", about = "Serbian Latin/Cyrillic transliteration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert TEXT, or stdin line by line when no TEXT is given.
    Convert {
        #[arg(long, value_enum, default_value_t = Script::Cyrillic)]
        to: Script,
        /// JSON config file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Lexicon file written by `translit lexicon`, used instead of the built-in lists.
        #[arg(long)]
        lexicon: Option<PathBuf>,
        text: Vec<String>,
    },
    /// Create or edit a persisted lexicon.
    Lexicon {
        #[command(subcommand)]
        action: LexiconAction,
    },
}

#[derive(Subcommand)]
enum LexiconAction {
    /// Write the built-in lexicon to FILE.
    Init { file: PathBuf },
    /// Add a whole-word override; without REPLACEMENT the word is left as written.
    Override {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Script::Cyrillic)]
        to: Script,
        word: String,
        replacement: Option<String>,
    },
    /// Stop letter pairs from merging in words containing STEM.
    Suppress {
        file: PathBuf,
        stem: String,
        /// Match STEM as a whole word instead of a substring.
        #[arg(long)]
        whole_word: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Script {
    Cyrillic,
    Latin,
}

impl Script {
    fn direction(self) -> Direction {
        match self {
            Script::Cyrillic => Direction::LatinToCyrillic,
            Script::Latin => Direction::CyrillicToLatin,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Convert { to, config, lexicon, text } => {
            convert(to.direction(), config, lexicon, &text)
        }
        Command::Lexicon { action } => edit_lexicon(action),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("translit: {e}");
            ExitCode::FAILURE
        }
    }
}

fn convert(
    direction: Direction,
    config: Option<PathBuf>,
    lexicon: Option<PathBuf>,
    text: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    let lexicon = match lexicon {
        Some(path) => load_lexicon(&path)?,
        None => Lexicon::builtin(),
    };
    let engine = Transliterator::with_lexicon(config, lexicon);

    if !text.is_empty() {
        println!("{}", engine.transliterate(&text.join(" "), direction));
        return Ok(());
    }

    let stdin = io::stdin();
    if stdin.is_tty() {
        return interactive(&engine, direction);
    }
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        writeln!(stdout, "{}", engine.transliterate(&line?, direction))?;
    }
    Ok(())
}

fn interactive(engine: &Transliterator, mut direction: Direction) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    println!("{}", "Serbian transliteration. ':c' to Cyrillic, ':l' to Latin, 'exit' to quit.".bold());

    let mut line = String::new();
    loop {
        print!("{} > ", direction.to_string().dark_grey());
        stdout.flush()?;

        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim_end_matches(['\r', '\n']) {
            "exit" => break,
            ":c" => direction = Direction::LatinToCyrillic,
            ":l" => direction = Direction::CyrillicToLatin,
            input => println!("{}", engine.transliterate(input, direction).green()),
        }
    }
    Ok(())
}

fn edit_lexicon(action: LexiconAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LexiconAction::Init { file } => save_lexicon(&Lexicon::builtin(), &file)?,
        LexiconAction::Override { file, to, word, replacement } => {
            let mut lexicon = load_lexicon(&file)?;
            // The override is keyed in the source script of the conversion.
            lexicon.add_override(to.direction(), &word, replacement.as_deref().unwrap_or(""))?;
            save_lexicon(&lexicon, &file)?;
        }
        LexiconAction::Suppress { file, stem, whole_word } => {
            let mut lexicon = load_lexicon(&file)?;
            if whole_word {
                lexicon.add_suppressed_word(&stem)?;
            } else {
                lexicon.add_suppressed_substring(&stem)?;
            }
            save_lexicon(&lexicon, &file)?;
        }
    }
    Ok(())
}
