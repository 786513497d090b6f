use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "SHORTLINK_GRPC_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "SHORTLINK_STORAGE_BACKEND";
pub const POSTGRES_DSN_ENV: &str = "SHORTLINK_POSTGRES_DSN";
pub const POSTGRES_POOL_SIZE_ENV: &str = "SHORTLINK_POSTGRES_POOL_SIZE";
pub const TLS_ENV: &str = "SHORTLINK_TLS";
pub const TLS_CERT_FILE_ENV: &str = "SHORTLINK_TLS_CERT_FILE";
pub const TLS_KEY_FILE_ENV: &str = "SHORTLINK_TLS_KEY_FILE";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:50051";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "postgres")]
    Postgres,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Postgres => write!(f, "postgres"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shortlink-grpc-server")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = POSTGRES_DSN_ENV, required_if_eq("storage", "postgres"))]
    pub postgres_dsn: Option<String>,

    /// Upper bound on pooled Postgres connections. The pool is the only
    /// admission control downstream of the service.
    #[arg(long, env = POSTGRES_POOL_SIZE_ENV, default_value_t = 5)]
    pub postgres_pool_size: u32,

    /// Serve with TLS instead of plain TCP.
    #[arg(long, env = TLS_ENV, default_value_t = false)]
    pub tls: bool,

    #[arg(long, env = TLS_CERT_FILE_ENV, required_if_eq("tls", "true"))]
    pub cert_file: Option<PathBuf>,

    #[arg(long, env = TLS_KEY_FILE_ENV, required_if_eq("tls", "true"))]
    pub key_file: Option<PathBuf>,
}
