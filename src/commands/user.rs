use super::CommandRunner;
use crate::cli;
use crate::rest::{CreatedResponse, UserResponse};
use crate::storage::UserStore;
use crate::types::{SearchForm, UserForm};
use anyhow::{Context, Result};
use serde_json::Value;

impl cli::UserCmd {
    /// Run the operation and return what should be printed.
    pub fn execute<S: UserStore>(&self, store: &S) -> Result<Value> {
        let out = match self {
            cli::UserCmd::Insert { form } => {
                let user = UserForm::from(form.clone())
                    .into_new_user()
                    .context("reading user form")?;
                let id = store.insert(&user).context("inserting user")?;
                log::info!("registered user {} ({})", id, user.name);
                serde_json::to_value(CreatedResponse { id })?
            }
            cli::UserCmd::Show { id } => {
                let record = store
                    .get_by_id(*id)
                    .with_context(|| format!("loading user {id}"))?;
                serde_json::to_value(UserResponse::from(record))?
            }
            cli::UserCmd::Update { id, form } => {
                let user = UserForm::from(form.clone())
                    .into_new_user()
                    .context("reading user form")?;
                let record = store
                    .update(*id, &user)
                    .with_context(|| format!("updating user {id}"))?;
                log::info!("updated user {}", record.id);
                serde_json::to_value(UserResponse::from(record))?
            }
            cli::UserCmd::Delete { id } => {
                let record = store
                    .delete(*id)
                    .with_context(|| format!("deleting user {id}"))?;
                log::info!("deleted user {}", record.id);
                serde_json::to_value(UserResponse::from(record))?
            }
            cli::UserCmd::Search {
                name,
                year,
                category,
            } => {
                let filter = SearchForm {
                    name: name.clone().unwrap_or_default(),
                    year: year.clone().unwrap_or_default(),
                    category: category.clone().unwrap_or_default(),
                }
                .into_filter()
                .context("reading search form")?;
                let record = store.search(&filter).context("searching users")?;
                serde_json::to_value(UserResponse::from(record))?
            }
        };
        Ok(out)
    }
}

impl CommandRunner for cli::UserCmd {
    fn run<S: UserStore>(&self, store: &S) -> Result<()> {
        let out = self.execute(store)?;
        println!("{}", serde_json::to_string_pretty(&out)?);
        Ok(())
    }
}
