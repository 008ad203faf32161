use clap::{Parser, ValueEnum};
use nutriscan_core::domain::common::{
    BackendConfig, DEFAULT_BACKEND_URL, DEFAULT_REQUEST_TIMEOUT_SECS, FallbackConfig,
    FallbackMode, NutriscanConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriscan-api", version, about = "Food image analysis API")]
pub struct Args {
    #[command(flatten)]
    pub backend: BackendArgs,

    #[command(flatten)]
    pub fallback: FallbackArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BackendArgs {
    /// Base URL of the recognition backend serving `/predict` and `/upload`
    #[arg(long = "backend-url", env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub url: String,

    #[arg(
        long = "backend-timeout-secs",
        env = "BACKEND_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FallbackModeArg {
    Simulated,
    Disabled,
}

impl From<FallbackModeArg> for FallbackMode {
    fn from(mode: FallbackModeArg) -> Self {
        match mode {
            FallbackModeArg::Simulated => FallbackMode::Simulated,
            FallbackModeArg::Disabled => FallbackMode::Disabled,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct FallbackArgs {
    /// What to do when the recognition backend is unreachable
    #[arg(
        long = "fallback-mode",
        env = "FALLBACK_MODE",
        value_enum,
        default_value_t = FallbackModeArg::Simulated
    )]
    pub mode: FallbackModeArg,

    /// Seed for the simulated backend, for reproducible runs
    #[arg(long = "fallback-seed", env = "FALLBACK_SEED")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for NutriscanConfig {
    fn from(args: Args) -> Self {
        NutriscanConfig {
            backend: BackendConfig {
                base_url: args.backend.url,
                request_timeout_secs: args.backend.timeout_secs,
            },
            fallback: FallbackConfig {
                mode: args.fallback.mode.into(),
                seed: args.fallback.seed,
            },
        }
    }
}
