//! src/domain/greeting.rs
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

const GREETING: &str = "Hello World from AWS EC2!";

/// Version of the toolchain the binary was compiled with.
const RUNTIME_VERSION: &str = env!("HELLO_SERVICE_RUSTC_VERSION");

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    pub message: &'static str,
    pub timestamp: String,
    pub server_info: ServerInfo,
}

impl Greeting {
    pub fn new(now: DateTime<Utc>, server_info: ServerInfo) -> Self {
        Self {
            message: GREETING,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            server_info,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub hostname: String,
    pub platform: &'static str,
    #[serde(rename = "nodeVersion")]
    pub runtime_version: &'static str,
}

impl ServerInfo {
    /// Inspects the host the process is currently running on.
    pub fn current() -> Self {
        let hostname = gethostname::gethostname().to_string_lossy().into_owned();
        let hostname = if hostname.is_empty() {
            "unknown".to_string()
        } else {
            hostname
        };

        Self {
            hostname,
            platform: std::env::consts::OS,
            runtime_version: RUNTIME_VERSION,
        }
    }
}
