use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "jums.sqlite";

#[derive(Clone, Debug)]
pub struct Configuration {
    pub data_dir: String,
    pub busy_timeout: Duration,
    pub api_listen: SocketAddr,
    pub log_file: Option<String>,
    pub reset: bool,
}

impl Configuration {
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(DB_FILE_NAME)
    }
}
