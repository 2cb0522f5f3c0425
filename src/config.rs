use std::{env, path::PathBuf};

/// Startup configuration, read once from the environment.
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// When set, uploaded images are persisted here before analysis.
    /// Unset by default: the request leaves no trace on disk.
    pub upload_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse::<u16>()
            .expect("PORT must be a valid number between 0 and 65535");

        let upload_dir = env::var("UPLOAD_DIR").ok().map(PathBuf::from);

        ServerConfig {
            host,
            port,
            upload_dir,
        }
    }
}
