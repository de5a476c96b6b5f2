use std::io::Read;
use std::time::Duration;

use crate::error::{SyncError, SyncResult};

/// SchaleDB's CDN rejects requests without a browser-like agent
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client shared by every subcommand
#[derive(Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(REQUEST_TIMEOUT)
    }
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }

    fn call(&self, url: &str) -> SyncResult<ureq::Response> {
        self.agent.get(url).call().map_err(|err| match err {
            ureq::Error::Status(status, _) => SyncError::Status {
                url: url.to_string(),
                status,
            },
            ureq::Error::Transport(t) => SyncError::Transport {
                url: url.to_string(),
                reason: t.to_string(),
            },
        })
    }

    pub fn get_bytes(&self, url: &str) -> SyncResult<Vec<u8>> {
        let response = self.call(url)?;
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| SyncError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(body)
    }

    pub fn get_json(&self, url: &str) -> SyncResult<serde_json::Value> {
        let body = self.get_bytes(url)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
