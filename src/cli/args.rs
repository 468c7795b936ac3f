use clap::Parser;
use std::env;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Register, edit and look up user records",
    long_about = "Stores user records (name, birthdate, phone, type, comment) in SQLite.\n\nWithout a subcommand the REST API is served until Ctrl-C. With a subcommand a single operation runs and its result is printed as JSON.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long,
        env = "JUMS_DATA_DIR",
        default_value = ".jums/",
        value_name = "DIR",
        help = "Directory holding the SQLite database"
    )]
    pub data_dir: String,

    #[arg(
        long,
        default_value_t = false,
        help = "Delete the SQLite database before starting"
    )]
    pub reset: bool,

    #[arg(
        long = "busy-timeout-ms",
        env = "JUMS_BUSY_TIMEOUT_MS",
        default_value_t = 500u64,
        value_name = "MS",
        help = "How long a statement waits on a locked database before failing"
    )]
    pub busy_timeout_ms: u64,

    #[arg(
        long = "log-file",
        env = "JUMS_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long = "api-listen",
        env = "JUMS_API_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:8080",
        help = "REST API listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();
    Cli::parse()
}
