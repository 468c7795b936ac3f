use crate::cli::Command;
use crate::storage::UserStore;

pub mod user;

pub trait CommandRunner {
    fn run<S: UserStore>(&self, store: &S) -> anyhow::Result<()>;
}

impl Command {
    pub fn run<S: UserStore>(&self, store: &S) -> anyhow::Result<()> {
        match self {
            Command::User { cmd } => cmd.run(store),
        }
    }
}
