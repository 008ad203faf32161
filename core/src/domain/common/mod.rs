use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct NutriscanConfig {
    pub backend: BackendConfig,
    pub fallback: FallbackConfig,
}

#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FallbackConfig {
    pub mode: FallbackMode,
    /// Seed for the simulated predictor. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackMode {
    /// Substitute simulated predictions when the backend is unreachable.
    #[default]
    Simulated,
    /// Surface transport failures to the caller.
    Disabled,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let first = generate_uuid_v7();
        let second = generate_uuid_v7();
        assert_ne!(first, second);
        assert_eq!(first.get_version_num(), 7);
    }

    #[test]
    fn test_default_config_points_at_local_backend() {
        let backend = BackendConfig::default();
        assert_eq!(backend.base_url, "http://localhost:5000");
        assert_eq!(FallbackConfig::default().mode, FallbackMode::Simulated);
    }
}
