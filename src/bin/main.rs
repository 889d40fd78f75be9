//! Conlang lexicon CLI entry point

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::{Parser, Subcommand};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use lexicon_core::core::types::ScoredForm;
use lexicon_core::{vocabulary, LexiconConfig, LexiconEngine, LexiconError, LexiconMapping};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExitCode(i32);

impl ExitCode {
    const SUCCESS: ExitCode = ExitCode(0);
    const FAILURE: ExitCode = ExitCode(1);
}

/// User-facing message plus the code to exit with.
#[derive(Debug)]
struct CliError {
    message: String,
    exit_code: ExitCode,
}

impl CliError {
    fn failure(message: impl Into<String>) -> Self {
        Self { message: message.into(), exit_code: ExitCode::FAILURE }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<LexiconError> for CliError {
    fn from(err: LexiconError) -> Self {
        Self::failure(format!("error: {err}"))
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::failure(format!("I/O error: {err}"))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::failure(format!("could not encode JSON: {err}"))
    }
}

type CliResult<T> = Result<T, CliError>;

/// Generate a constructed-language lexicon ranked by pronunciation difficulty
#[derive(Parser, Debug)]
#[command(name = "lexicon_engine")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file with categories, weights and rules (default: built-in English IPA)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print ranked forms, easiest first
    Generate {
        /// Only print the first N forms
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Assign forms to a frequency list (one word per line, most common first)
    Assign {
        #[arg(value_name = "VOCAB")]
        vocab: PathBuf,
        /// Only print the first N pairs
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Translate text using a frequency list
    Translate {
        #[arg(value_name = "VOCAB")]
        vocab: PathBuf,
        #[arg(value_name = "TEXT", required = true, num_args = 1..)]
        text: Vec<String>,
        /// Translate constructed words back to the source language
        #[arg(short, long)]
        reverse: bool,
    },

    /// Interactive translation loop
    Repl {
        #[arg(value_name = "VOCAB")]
        vocab: PathBuf,
    },

    /// Show the difficulty breakdown of words
    Score {
        #[arg(value_name = "WORD", required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Print the built-in configuration as JSON
    Config,
}

#[derive(Serialize)]
struct Pair<'a> {
    rank: usize,
    word: &'a str,
    form: &'a str,
}

fn main() {
    // Logs go to stderr; default to warnings so command output stays clean
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) if code != ExitCode::SUCCESS => process::exit(code.0),
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", e.message);
            process::exit(e.exit_code.0);
        }
    }
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    if let Command::Config = cli.command {
        println!("{}", serde_json::to_string_pretty(&LexiconConfig::english_ipa())?);
        return Ok(ExitCode::SUCCESS);
    }

    let engine = load_engine(cli.config.as_deref())?;
    match cli.command {
        Command::Generate { limit, json } => generate(&engine, limit, json),
        Command::Assign { vocab, limit, json } => assign(&engine, &vocab, limit, json),
        Command::Translate { vocab, text, reverse } => {
            let mapping = build_mapping(&engine, &vocab)?;
            let translator = engine.translator(&mapping);
            let text = text.join(" ");
            let out = if reverse { translator.translate_back(&text) } else { translator.translate(&text) };
            println!("{out}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Repl { vocab } => repl(&engine, &vocab),
        Command::Score { words } => score(&engine, &words),
        Command::Config => Ok(ExitCode::SUCCESS),
    }
}

fn load_engine(config: Option<&Path>) -> CliResult<LexiconEngine> {
    let engine = match config {
        Some(path) => LexiconEngine::from_config(LexiconConfig::from_path(path).map_err(|e| {
            CliError::failure(format!("could not load config '{}': {e}", path.display()))
        })?)?,
        None => LexiconEngine::english_ipa()?,
    };
    Ok(engine)
}

fn build_mapping(engine: &LexiconEngine, vocab: &Path) -> CliResult<LexiconMapping> {
    let words = vocabulary::load_from_path(vocab)
        .map_err(|e| CliError::failure(format!("could not read vocabulary '{}': {e}", vocab.display())))?;
    Ok(engine.build_mapping(&words)?)
}

fn generate(engine: &LexiconEngine, limit: Option<usize>, json: bool) -> CliResult<ExitCode> {
    let lexicon = engine.ranked_lexicon()?;
    let shown = &lexicon.as_slice()[..limit.unwrap_or(usize::MAX).min(lexicon.len())];
    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(ExitCode::SUCCESS);
    }

    let mut out = io::stdout().lock();
    for (rank, form) in shown.iter().enumerate() {
        writeln!(out, "{:>7}  {:<10} {:>3}  {}", rank + 1, form.text, form.score, symbols(form).dark_grey())?;
    }
    writeln!(out, "{}", format!("{} of {} forms", shown.len(), lexicon.len()).bold())?;
    Ok(ExitCode::SUCCESS)
}

fn assign(engine: &LexiconEngine, vocab: &Path, limit: Option<usize>, json: bool) -> CliResult<ExitCode> {
    let mapping = build_mapping(engine, vocab)?;
    let pairs: Vec<Pair> = mapping
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(idx, (word, form))| Pair { rank: idx + 1, word, form })
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
        return Ok(ExitCode::SUCCESS);
    }

    let mut out = io::stdout().lock();
    for pair in &pairs {
        writeln!(out, "{:>7}  {:<16} {}", pair.rank, pair.word, pair.form.cyan())?;
    }
    if mapping.unassigned() > 0 {
        writeln!(
            out,
            "{}",
            format!("{} words left untranslated: the lexicon has only {} forms", mapping.unassigned(), mapping.len())
                .yellow()
        )?;
    }
    Ok(ExitCode::SUCCESS)
}

fn score(engine: &LexiconEngine, words: &[String]) -> CliResult<ExitCode> {
    for word in words {
        let (total, breakdown) = engine.score_word(word);
        let parts: Vec<String> = breakdown.iter().map(|s| format!("{}={}", s.text, s.weight)).collect();
        println!("{}  {}  ({})", word.as_str().bold(), total, parts.join(" + "));
    }
    Ok(ExitCode::SUCCESS)
}

fn repl(engine: &LexiconEngine, vocab: &Path) -> CliResult<ExitCode> {
    let mapping = build_mapping(engine, vocab)?;
    let translator = engine.translator(&mapping);
    let mut reverse = false;
    let mut stdout = io::stdout();

    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Conlang translator. Type 'exit' to quit, ':r' to switch direction.".bold());
    println!("{} words mapped", mapping.len());
    println!("---------------------------------------------------------------");

    loop {
        let direction = if reverse { "conlang -> source" } else { "source -> conlang" };
        print!("{} ", format!("[{direction}] >").dark_grey());
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        match input.trim() {
            "exit" => break,
            ":r" => reverse = !reverse,
            "" => {}
            line => {
                let out = if reverse { translator.translate_back(line) } else { translator.translate(line) };
                println!("{}", out.green());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn symbols(form: &ScoredForm) -> String {
    form.symbols.join("·")
}
