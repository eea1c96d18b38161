use std::net::SocketAddr;
use std::path::PathBuf;

use error_stack::{Report, ResultExt};

use kernel::KernelError;

static SERVER_BIND: &str = "SERVER_BIND";
static LOG_DIR: &str = "LOG_DIR";

const DEFAULT_BIND: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);
const DEFAULT_LOG_DIR: &str = "./logs/";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind: SocketAddr,
    log_dir: PathBuf,
}

impl ServerConfig {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                return Err(Report::new(error)
                    .change_context(KernelError::Internal)
                    .attach_printable("Failed to load .env"));
            }
        }
        let bind = match dotenvy::var(SERVER_BIND) {
            Ok(bind) => bind
                .parse::<SocketAddr>()
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| format!("{SERVER_BIND} is not a socket address: {bind}"))?,
            Err(_) => SocketAddr::from(DEFAULT_BIND),
        };
        let log_dir = dotenvy::var(LOG_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR));
        Ok(Self { bind, log_dir })
    }

    pub fn bind(&self) -> SocketAddr {
        self.bind
    }

    pub fn log_dir(&self) -> &PathBuf {
        &self.log_dir
    }
}
