use crate::EdgeError;
use std::net::SocketAddr;

pub const DEFAULT_MESSAGE: &str = "Hello from Cloudflare Worker";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8787";

pub const MESSAGE_VAR: &str = "VALUE_FROM_CLOUDFLARE";
pub const ADDR_VAR: &str = "EDGE_ADDR";

#[derive(Clone, Debug)]
pub struct EdgeConfig {
    /// Greeting override; `None` serves [`DEFAULT_MESSAGE`].
    pub message: Option<String>,
    pub addr: SocketAddr,
}

impl EdgeConfig {
    pub fn from_env() -> Result<Self, EdgeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests don't touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EdgeError> {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .map_err(|source| EdgeError::InvalidAddr { addr, source })?;
        Ok(Self {
            message: lookup(MESSAGE_VAR),
            addr,
        })
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            message: None,
            addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
        }
    }
}
