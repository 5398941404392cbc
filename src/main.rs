mod launch;

use clap::Parser;
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("TERMLAUNCH_VERSION"),
    " ",
    env!("TERMLAUNCH_BUILD_HASH")
);

/// Run a command in a new, visible terminal window.
#[derive(Parser, Debug)]
#[command(name = "termlaunch", version = VERSION)]
struct Arguments {
    /// Shell command string to run, already quoted, instead of ARGS
    #[arg(short = 'c', long = "command", conflicts_with = "args")]
    command: Option<String>,

    /// Starting directory of the terminal [default: current directory]
    #[arg(short = 'C', long, value_name = "DIR")]
    cwd: Option<PathBuf>,

    /// Stay in an interactive shell after the command exits
    #[arg(short, long)]
    keep_open: bool,

    /// Set a variable in the terminal's environment
    #[arg(
        short = 'e',
        long = "env",
        value_name = "KEY=VALUE",
        value_parser = launch::parse_env_pair
    )]
    env: Vec<(String, String)>,

    /// Start from an empty environment instead of inheriting this one
    #[arg(long)]
    clean_env: bool,

    /// Linux terminal emulator to try first
    #[arg(short, long, value_name = "NAME")]
    terminal: Option<String>,

    /// Read settings from this file instead of ~/.termlaunch.json
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default ~/.termlaunch.json if none exists, then exit
    #[arg(long)]
    init_config: bool,

    /// Print the JSON schema of the config file, then exit
    #[arg(long)]
    print_schema: bool,

    /// Program to run followed by its arguments
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present_any = ["command", "init_config", "print_schema"]
    )]
    args: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let arguments = Arguments::parse();
    launch::run(&arguments)
}
