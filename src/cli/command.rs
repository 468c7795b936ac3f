use clap::Subcommand;

use crate::cli::user_cmd::UserCmd;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "User record commands",
        long_about = "Run a single insert, show, update, delete or search against the user table and print the result as JSON."
    )]
    User {
        #[command(subcommand)]
        cmd: UserCmd,
    },
}
