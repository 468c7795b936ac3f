mod args;
mod command;
mod user_cmd;

pub use args::Cli;
pub use command::Command;
pub use user_cmd::{UserCmd, UserFormArgs};

pub use args::parse;
