mod cli;
mod helper;
use helper::ReplHelper;

use clap::Parser;
use colored::Colorize;
use diceroller_lib::pretty;
use diceroller_lib::Partial;
use diceroller_lib::RandomSource;
use diceroller_lib::RollResult;
use diceroller_lib::Roller;
use diceroller_lib::SharedSource;
use diceroller_lib::Source;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::Level;

/// How each roll gets printed
struct Output {
    full: bool,
    html: bool,
    skin: MadSkin,
}

impl Output {
    fn render(&self, result: &RollResult) -> String {
        let text = if self.full {
            pretty::prettify_one_full(result)
        } else {
            pretty::prettify_one(result)
        };
        if self.html {
            return pretty::html(&text);
        }
        let markdown = match text.split_once(": ") {
            Some((roll, dice)) => format!("**{roll}:** `{dice}`"),
            None => format!("`{text}`"),
        };
        self.skin.inline(&markdown).to_string()
    }
}

fn roll_line<S: Source>(roller: &mut Roller<S>, output: &Output, line: &str) {
    let tokens = match diceroller_lib::parse([line]) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", format!("{}", error).bold().red());
            return;
        }
    };
    if tokens.is_empty() {
        eprintln!("{}", "repl: warn: no dice roll found".bold().yellow());
        return;
    }
    tracing::debug!(?tokens, "rolling");
    let (results, error) = match roller.roll_details(&tokens) {
        Ok(results) => (results, None),
        Err(Partial {
            output: results,
            error,
        }) => (results, Some(error)),
    };
    for result in results.iter() {
        println!("{}", output.render(result));
    }
    if let Some(error) = error {
        eprintln!("{}", format!("{}", error).bold().red());
    }
}

fn main() -> Result<()> {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let source: Box<dyn Source> = match args.seed {
        Some(seed) => {
            tracing::info!(seed, "rolling with seeded dice");
            Box::new(RandomSource {
                generator: StdRng::seed_from_u64(seed),
            })
        }
        None => Box::new(SharedSource),
    };
    let mut roller = Roller::with_source(source);

    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);
    let output = Output {
        full: !args.short,
        html: args.html,
        skin,
    };

    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        colored: "".to_owned(),
    };
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(&args.history).is_err() {
        eprintln!("{}", "repl: warn: no previous history".bold().yellow());
    }
    let mut count = 1u64;
    loop {
        let prompt = format!("roll: {}> ", count);
        if let Some(helper) = rline.helper_mut() {
            helper.colored = prompt.bold().green().to_string();
        }
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                if !line.trim().is_empty() {
                    roll_line(&mut roller, &output, &line);
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "repl: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "repl: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("repl: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(&args.history)
}
