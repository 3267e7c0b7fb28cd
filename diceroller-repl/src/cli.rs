use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;

const REPL_AUTHOR: &str = crate_authors!();
const REPL_VERSION: &str = crate_version!();
const REPL_ABOUT: &str = crate_description!();
const REPL_FLAG_D_SHORT: char = 'd';
const REPL_FLAG_D_HELP: &str = "Enable Debug logging";
const REPL_FLAG_SHORT_HELP: &str = "Print only the dice, without the roll they came from";
const REPL_FLAG_HTML_HELP: &str = "Print results as HTML";
const REPL_FLAG_S_SHORT: char = 's';
const REPL_FLAG_S_HELP: &str = "Seed the dice for reproducible rolls";
const REPL_FLAG_HISTORY_HELP: &str = "Where to keep the line history";
const REPL_HISTORY_FILE: &str = "history";

#[derive(Parser, Debug)]
#[command(author = REPL_AUTHOR, version = REPL_VERSION, about = REPL_ABOUT)]
pub struct Args {
    #[arg(short = REPL_FLAG_D_SHORT, long, help = REPL_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(long, help = REPL_FLAG_SHORT_HELP, action)]
    pub short: bool,
    #[arg(long, help = REPL_FLAG_HTML_HELP, action)]
    pub html: bool,
    #[arg(short = REPL_FLAG_S_SHORT, long, help = REPL_FLAG_S_HELP)]
    pub seed: Option<u64>,
    #[arg(long, help = REPL_FLAG_HISTORY_HELP, default_value = REPL_HISTORY_FILE)]
    pub history: String,
}
