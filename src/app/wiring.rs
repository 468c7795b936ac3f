use crate::{context, storage};
use anyhow::{Context, Result};

pub fn init_data_dir(ctx: &context::Context) -> Result<()> {
    let data_dir = std::path::PathBuf::from(&ctx.config.data_dir);
    std::fs::create_dir_all(&data_dir)?;
    Ok(())
}

pub fn init_storage(ctx: &context::Context) -> Result<storage::SqliteUserStore> {
    let source = storage::SqliteFile::new(ctx.config.db_path())
        .with_busy_timeout(ctx.config.busy_timeout);
    let sqlite = storage::SqliteUserStore::with_source(source);
    if ctx.config.reset {
        sqlite.reset_all().context("resetting storage")?;
    }
    sqlite.init().context("initializing storage")?;
    Ok(sqlite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Configuration;
    use crate::storage::UserStore;
    use crate::types::NewUser;
    use chrono::NaiveDate;
    use std::time::Duration;
    use tempfile::TempDir;

    fn ctx(dir: &TempDir, reset: bool) -> context::Context {
        context::Context {
            config: Configuration {
                data_dir: dir.path().join("data").to_string_lossy().into_owned(),
                busy_timeout: Duration::from_millis(100),
                api_listen: "127.0.0.1:0".parse().unwrap(),
                log_file: None,
                reset,
            },
        }
    }

    #[test]
    fn reset_starts_from_an_empty_table() {
        let dir = TempDir::new().unwrap();

        let keep = ctx(&dir, false);
        init_data_dir(&keep).unwrap();
        let store = init_storage(&keep).unwrap();
        let id = store
            .insert(&NewUser {
                name: "Aoi".into(),
                birthdate: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
                phone: String::new(),
                category: 1,
                comment: None,
            })
            .unwrap();
        assert!(init_storage(&keep).unwrap().get_by_id(id).is_ok());

        let store = init_storage(&ctx(&dir, true)).unwrap();
        assert!(store.get_by_id(id).unwrap_err().is_not_found());
    }
}
